// src/application/commands/media.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{object_store::ObjectStore, time::Clock},
};
use bytes::Bytes;
use std::sync::Arc;

/// Fixed key for the singleton homepage video; each upload overwrites the
/// previous object in place.
pub const HOMEPAGE_VIDEO_KEY: &str = "homePageVideo";

pub struct UploadVideoCommand {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

pub struct UploadHomepageVideoCommand {
    pub content_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct UploadedVideo {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct StoredHomepageVideo {
    pub bucket: String,
    pub key: String,
}

pub struct MediaCommandService {
    object_store: Arc<dyn ObjectStore>,
    clock: Arc<dyn Clock>,
}

impl MediaCommandService {
    pub fn new(object_store: Arc<dyn ObjectStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            object_store,
            clock,
        }
    }

    /// Store an uploaded video under a timestamp-prefixed key and hand back
    /// the public URL content blocks will reference.
    pub async fn upload_video(&self, command: UploadVideoCommand) -> ApplicationResult<UploadedVideo> {
        ensure_video(&command.content_type)?;

        let key = format!(
            "{}_{}",
            self.clock.now().timestamp_millis(),
            command.filename
        );
        self.object_store
            .put(&key, &command.content_type, command.data)
            .await?;

        tracing::info!(key = %key, "video uploaded");
        Ok(UploadedVideo {
            url: self.object_store.public_url(&key),
            key,
        })
    }

    pub async fn upload_homepage_video(
        &self,
        command: UploadHomepageVideoCommand,
    ) -> ApplicationResult<StoredHomepageVideo> {
        ensure_video(&command.content_type)?;

        self.object_store
            .put(HOMEPAGE_VIDEO_KEY, &command.content_type, command.data)
            .await?;

        tracing::info!(key = HOMEPAGE_VIDEO_KEY, "homepage video replaced");
        Ok(StoredHomepageVideo {
            bucket: self.object_store.bucket().to_owned(),
            key: HOMEPAGE_VIDEO_KEY.to_owned(),
        })
    }
}

fn ensure_video(content_type: &str) -> ApplicationResult<()> {
    if content_type.starts_with("video/") {
        Ok(())
    } else {
        Err(ApplicationError::validation(
            "invalid file type, only videos are allowed",
        ))
    }
}
