// src/application/queries/articles.rs
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleReadRepository, ArticleStatus},
};
use std::sync::Arc;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub limit: Option<u32>,
}

pub struct GetArticleByIdQuery {
    pub id: String,
}

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let status = query
            .status
            .map(|value| ArticleStatus::parse(&value).map_err(ApplicationError::from))
            .transpose()?;
        let limit = match query.limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(value) => value.min(MAX_LIMIT),
        };

        let articles = self.read_repo.list(status, limit).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }

    /// The featured slot is resolved at read time: most recent published
    /// article carrying the flag wins.
    pub async fn get_main_featured(&self) -> ApplicationResult<ArticleDto> {
        let article = self
            .read_repo
            .find_main_featured()
            .await?
            .ok_or_else(|| ApplicationError::not_found("no main featured article found"))?;
        Ok(article.into())
    }
}
