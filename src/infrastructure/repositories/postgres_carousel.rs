// src/infrastructure/repositories/postgres_carousel.rs
use super::map_sqlx;
use crate::domain::carousel::{
    CarouselImage, CarouselImageId, CarouselImageRepository, NewCarouselImage,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresCarouselImageRepository {
    pool: PgPool,
}

impl PostgresCarouselImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CarouselImageRow {
    id: Uuid,
    data: Vec<u8>,
    content_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CarouselImageRow> for CarouselImage {
    fn from(row: CarouselImageRow) -> Self {
        Self {
            id: CarouselImageId::from(row.id),
            data: row.data,
            content_type: row.content_type,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CarouselImageRepository for PostgresCarouselImageRepository {
    async fn insert(&self, image: NewCarouselImage) -> DomainResult<CarouselImage> {
        let id = CarouselImageId::generate();

        let row = sqlx::query_as::<_, CarouselImageRow>(
            "INSERT INTO carousel_images (id, data, content_type, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, data, content_type, created_at, updated_at",
        )
        .bind(id.as_uuid())
        .bind(image.data)
        .bind(image.content_type)
        .bind(image.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn list(&self) -> DomainResult<Vec<CarouselImage>> {
        let rows = sqlx::query_as::<_, CarouselImageRow>(
            "SELECT id, data, content_type, created_at, updated_at
             FROM carousel_images ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: CarouselImageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM carousel_images WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("image not found".into()));
        }
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM carousel_images")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}
