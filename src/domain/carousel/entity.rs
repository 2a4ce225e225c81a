use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselImageId(Uuid);

impl CarouselImageId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(token: &str) -> DomainResult<Self> {
        Uuid::parse_str(token)
            .map(Self)
            .map_err(|_| DomainError::InvalidId(format!("malformed carousel image id: {token}")))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CarouselImageId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CarouselImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Homepage carousel image: raw bytes stored alongside their content type.
/// Lifecycle is independent from articles.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselImage {
    pub id: CarouselImageId,
    pub data: Vec<u8>,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCarouselImage {
    pub data: Vec<u8>,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}
