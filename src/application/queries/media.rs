// src/application/queries/media.rs
use crate::application::{
    commands::media::HOMEPAGE_VIDEO_KEY, error::ApplicationResult,
    ports::object_store::ObjectStore,
};
use std::{sync::Arc, time::Duration};

pub struct SignedVideoUrlQuery {
    pub key: Option<String>,
}

pub struct MediaQueryService {
    object_store: Arc<dyn ObjectStore>,
    signed_url_ttl: Duration,
}

impl MediaQueryService {
    pub fn new(object_store: Arc<dyn ObjectStore>, signed_url_ttl: Duration) -> Self {
        Self {
            object_store,
            signed_url_ttl,
        }
    }

    /// Time-limited download URL for a stored video; without an explicit
    /// key the singleton homepage video is resolved.
    pub async fn signed_video_url(&self, query: SignedVideoUrlQuery) -> ApplicationResult<String> {
        let key = query
            .key
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| HOMEPAGE_VIDEO_KEY.to_owned());
        self.object_store
            .signed_url(&key, self.signed_url_ttl)
            .await
    }
}
