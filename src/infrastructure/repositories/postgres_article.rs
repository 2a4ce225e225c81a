// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, ContentBlock, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str =
    "id, title, tagline, main_image, author, date, content, status, is_main_featured";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    tagline: Option<String>,
    main_image: Option<String>,
    author: Option<String>,
    date: DateTime<Utc>,
    content: Json<Vec<ContentBlock>>,
    status: String,
    is_main_featured: bool,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::from(row.id),
            title: ArticleTitle::new(row.title)?,
            tagline: row.tagline,
            main_image: row.main_image,
            author: row.author,
            date: row.date,
            content: row.content.0,
            status: ArticleStatus::parse(&row.status)?,
            is_main_featured: row.is_main_featured,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            tagline,
            main_image,
            author,
            date,
            content,
            status,
            is_main_featured,
        } = article;

        let id = ArticleId::generate();

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (id, title, tagline, main_image, author, date, content, status, is_main_featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, title, tagline, main_image, author, date, content, status, is_main_featured",
        )
        .bind(id.as_uuid())
        .bind(String::from(title))
        .bind(tagline)
        .bind(main_image)
        .bind(author)
        .bind(date)
        .bind(Json(content))
        .bind(status.as_str())
        .bind(is_main_featured)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        if update.is_empty() {
            // Nothing to overwrite; hand back the stored record.
            let row = sqlx::query_as::<_, ArticleRow>(&format!(
                "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
            ))
            .bind(update.id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
            return row
                .ok_or_else(|| DomainError::NotFound("article not found".into()))
                .and_then(Article::try_from);
        }

        let ArticleUpdate {
            id,
            title,
            tagline,
            main_image,
            author,
            date,
            content,
            status,
            is_main_featured,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET ");
        let mut assignments = builder.separated(", ");

        if let Some(title) = title {
            assignments.push("title = ");
            assignments.push_bind_unseparated(String::from(title));
        }
        if let Some(tagline) = tagline {
            assignments.push("tagline = ");
            assignments.push_bind_unseparated(tagline);
        }
        if let Some(main_image) = main_image {
            assignments.push("main_image = ");
            assignments.push_bind_unseparated(main_image);
        }
        if let Some(author) = author {
            assignments.push("author = ");
            assignments.push_bind_unseparated(author);
        }
        if let Some(date) = date {
            assignments.push("date = ");
            assignments.push_bind_unseparated(date);
        }
        if let Some(content) = content {
            assignments.push("content = ");
            assignments.push_bind_unseparated(Json(content));
        }
        if let Some(status) = status {
            assignments.push("status = ");
            assignments.push_bind_unseparated(status.as_str());
        }
        if let Some(is_main_featured) = is_main_featured {
            assignments.push("is_main_featured = ");
            assignments.push_bind_unseparated(is_main_featured);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_uuid());
        builder.push(format!(" RETURNING {ARTICLE_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, status: Option<ArticleStatus>, limit: u32) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        if let Some(status) = status {
            builder.push(" WHERE status = ");
            builder.push_bind(status.as_str());
        }
        builder.push(" ORDER BY date DESC LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_main_featured(&self) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE is_main_featured = TRUE AND status = $1
             ORDER BY date DESC LIMIT 1"
        ))
        .bind(ArticleStatus::Published.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}
