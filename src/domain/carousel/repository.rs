use crate::domain::carousel::entity::{CarouselImage, CarouselImageId, NewCarouselImage};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CarouselImageRepository: Send + Sync {
    async fn insert(&self, image: NewCarouselImage) -> DomainResult<CarouselImage>;
    async fn list(&self) -> DomainResult<Vec<CarouselImage>>;
    async fn delete(&self, id: CarouselImageId) -> DomainResult<()>;
    async fn delete_all(&self) -> DomainResult<u64>;
}
