// src/application/queries/carousel.rs
use crate::{
    application::{dto::CarouselImageDto, error::ApplicationResult},
    domain::carousel::CarouselImageRepository,
};
use std::sync::Arc;

pub struct CarouselQueryService {
    repo: Arc<dyn CarouselImageRepository>,
}

impl CarouselQueryService {
    pub fn new(repo: Arc<dyn CarouselImageRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_images(&self) -> ApplicationResult<Vec<CarouselImageDto>> {
        let images = self.repo.list().await?;
        Ok(images.into_iter().map(Into::into).collect())
    }
}
