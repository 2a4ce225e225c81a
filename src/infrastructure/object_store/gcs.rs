// src/infrastructure/object_store/gcs.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::object_store::ObjectStore,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

/// Google Cloud Storage bucket behind the `ObjectStore` port. Credentials
/// are resolved from the ambient `SERVICE_ACCOUNT`/`GOOGLE_APPLICATION_CREDENTIALS`
/// environment the client library reads itself.
pub struct GcsObjectStore {
    client: cloud_storage::Client,
    bucket: String,
}

impl GcsObjectStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            client: cloud_storage::Client::default(),
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    // Virtual-hosted style so the URL path is exactly the object key and a
    // stored URL resolves back to its key by path parsing alone.
    fn public_url(&self, key: &str) -> String {
        format!("https://{}.storage.googleapis.com/{}", self.bucket, key)
    }

    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> ApplicationResult<()> {
        self.client
            .object()
            .create(&self.bucket, data.to_vec(), key, content_type)
            .await
            .map_err(map_storage)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> ApplicationResult<()> {
        self.client
            .object()
            .delete(&self.bucket, key)
            .await
            .map_err(map_storage)
    }

    async fn signed_url(&self, key: &str, expires_in: Duration) -> ApplicationResult<String> {
        let object = self
            .client
            .object()
            .read(&self.bucket, key)
            .await
            .map_err(map_storage)?;
        object
            .download_url(expires_in.as_secs() as u32)
            .map_err(map_storage)
    }
}

fn map_storage(err: cloud_storage::Error) -> ApplicationError {
    ApplicationError::object_store(err.to_string())
}
