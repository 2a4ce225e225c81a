// src/application/commands/carousel.rs
use crate::{
    application::{
        dto::CarouselImageDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::carousel::{CarouselImageId, CarouselImageRepository, NewCarouselImage},
};
use std::sync::Arc;

pub struct UploadCarouselImageCommand {
    pub content_type: String,
    pub data: Vec<u8>,
}

pub struct CarouselCommandService {
    repo: Arc<dyn CarouselImageRepository>,
    clock: Arc<dyn Clock>,
}

impl CarouselCommandService {
    pub fn new(repo: Arc<dyn CarouselImageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn upload_image(
        &self,
        command: UploadCarouselImageCommand,
    ) -> ApplicationResult<CarouselImageDto> {
        if !command.content_type.starts_with("image/") {
            return Err(ApplicationError::validation(
                "invalid file type, only images are allowed",
            ));
        }

        let stored = self
            .repo
            .insert(NewCarouselImage {
                data: command.data,
                content_type: command.content_type,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(image_id = %stored.id, "carousel image uploaded");
        Ok(stored.into())
    }

    pub async fn delete_image(&self, id: &str) -> ApplicationResult<()> {
        let id = CarouselImageId::parse(id)?;
        self.repo.delete(id).await?;
        tracing::info!(image_id = %id, "carousel image deleted");
        Ok(())
    }

    pub async fn delete_all_images(&self) -> ApplicationResult<u64> {
        let removed = self.repo.delete_all().await?;
        tracing::info!(removed, "carousel cleared");
        Ok(removed)
    }
}
