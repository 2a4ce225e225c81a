// src/application/commands/articles.rs
use crate::{
    application::{
        dto::{ArticleDto, ContentBlockInput},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::media_cleanup::MediaCleanupService,
    },
    domain::article::{
        ArticleId, ArticleReadRepository, ArticleStatus, ArticleTitle, ArticleUpdate,
        ArticleWriteRepository, BlockKind, ContentBlock, NewArticle,
    },
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub content: Vec<ContentBlockInput>,
    pub status: Option<String>,
    pub is_main_featured: Option<bool>,
}

pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub content: Option<Vec<ContentBlockInput>>,
    pub status: Option<String>,
    pub is_main_featured: Option<bool>,
}

pub struct DeleteArticleCommand {
    pub id: String,
}

pub struct ArticleCommandService {
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
    media_cleanup: Arc<MediaCleanupService>,
    clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        media_cleanup: Arc<MediaCleanupService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            media_cleanup,
            clock,
        }
    }

    /// Validation happens up front; nothing is persisted when the title is
    /// missing or a content block is malformed. A client-supplied `date`
    /// overrides the server-assigned creation time.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title.unwrap_or_default())?;
        let content = resolve_blocks(command.content)?;
        let status = parse_status(command.status)?.unwrap_or_default();
        let date = command.date.unwrap_or_else(|| self.clock.now());

        let new_article = NewArticle {
            title,
            tagline: command.tagline,
            main_image: command.main_image,
            author: command.author,
            date,
            content,
            status,
            is_main_featured: command.is_main_featured.unwrap_or(false),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = %created.id,
            title = %created.title,
            status = %created.status,
            blocks = created.content.len(),
            "article created"
        );
        Ok(created.into())
    }

    /// Partial semantics: only fields present in the command overwrite the
    /// stored record. A supplied block sequence is validated and normalized
    /// before it replaces the stored one.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut update = ArticleUpdate::new(id);
        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(tagline) = command.tagline {
            update = update.with_tagline(tagline);
        }
        if let Some(main_image) = command.main_image {
            update = update.with_main_image(main_image);
        }
        if let Some(author) = command.author {
            update = update.with_author(author);
        }
        if let Some(date) = command.date {
            update = update.with_date(date);
        }
        if let Some(content) = command.content {
            update = update.with_content(resolve_blocks(content)?);
        }
        if let Some(status) = parse_status(command.status)? {
            update = update.with_status(status);
        }
        if let Some(is_main_featured) = command.is_main_featured {
            update = update.with_main_featured(is_main_featured);
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }

    /// Media cleanup runs to completion before the record delete; the
    /// article is removed even when some or all media deletions failed.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::parse(&command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let report = self.media_cleanup.remove_article_media(&article).await;

        self.write_repo.delete(id).await?;
        tracing::info!(
            article_id = %id,
            media_deleted = report.deleted.len(),
            media_failed = report.failed.len(),
            media_skipped = report.skipped,
            "article deleted"
        );
        Ok(())
    }
}

fn parse_status(status: Option<String>) -> ApplicationResult<Option<ArticleStatus>> {
    status
        .map(|value| ArticleStatus::parse(&value).map_err(ApplicationError::from))
        .transpose()
}

/// Convert submitted blocks into their canonical shape, rejecting missing
/// or unrecognized tags and normalizing tweet blocks. Order is preserved.
fn resolve_blocks(blocks: Vec<ContentBlockInput>) -> ApplicationResult<Vec<ContentBlock>> {
    blocks
        .into_iter()
        .map(|input| {
            let ContentBlockInput {
                kind,
                content,
                caption,
                title,
                tweet_id,
            } = input;

            let kind = kind
                .as_deref()
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .ok_or_else(|| ApplicationError::validation("content block requires a type"))?;
            let kind = BlockKind::parse(kind)?;

            let block = ContentBlock {
                kind,
                content,
                caption,
                title,
                tweet_id,
            };
            Ok(block.validated()?)
        })
        .collect()
}
