// src/application/services/media_cleanup.rs
use crate::application::ports::object_store::ObjectStore;
use crate::domain::article::Article;
use std::sync::Arc;

/// Outcome of one cleanup sweep. Partial failure is an accepted outcome;
/// the caller proceeds with the record delete regardless.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MediaCleanupReport {
    pub deleted: Vec<String>,
    pub failed: Vec<String>,
    pub skipped: usize,
}

/// Keeps the object store consistent with article deletions: before an
/// article record is removed, every video object its blocks reference is
/// deleted from the bucket, best-effort.
pub struct MediaCleanupService {
    object_store: Arc<dyn ObjectStore>,
}

impl MediaCleanupService {
    pub fn new(object_store: Arc<dyn ObjectStore>) -> Self {
        Self { object_store }
    }

    /// Delete the video objects referenced by the article's content blocks,
    /// one key at a time. A block whose URL yields no key is skipped; a
    /// failed delete is logged and passed over. Never returns an error:
    /// media cleanup must not leave an article undeletable.
    pub async fn remove_article_media(&self, article: &Article) -> MediaCleanupReport {
        let mut report = MediaCleanupReport::default();

        for block in article.video_blocks() {
            let Some(key) = block.video_storage_key() else {
                tracing::warn!(
                    article_id = %article.id,
                    url = block.content.as_deref().unwrap_or_default(),
                    "video block URL yields no storage key, skipping"
                );
                report.skipped += 1;
                continue;
            };

            match self.object_store.delete(&key).await {
                Ok(()) => {
                    tracing::info!(article_id = %article.id, key = %key, "deleted video object");
                    report.deleted.push(key);
                }
                Err(err) => {
                    tracing::warn!(
                        article_id = %article.id,
                        key = %key,
                        error = %err,
                        "video object delete failed, continuing"
                    );
                    report.failed.push(key);
                }
            }
        }

        report
    }
}
