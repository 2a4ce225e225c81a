// src/infrastructure/repositories/mod.rs
mod postgres_article;
mod postgres_carousel;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_carousel::PostgresCarouselImageRepository;

use crate::domain::errors::DomainError;

pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}
