// src/application/ports/object_store.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

/// Seam to the external bucket holding uploaded media. Articles reference
/// stored objects by URL; they never own them.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    fn bucket(&self) -> &str;

    /// Publicly addressable URL for a stored key.
    fn public_url(&self, key: &str) -> String;

    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> ApplicationResult<()>;

    async fn delete(&self, key: &str) -> ApplicationResult<()>;

    /// Time-limited download URL for a stored key.
    async fn signed_url(&self, key: &str, expires_in: Duration) -> ApplicationResult<String>;
}
