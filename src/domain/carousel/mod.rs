pub mod entity;
pub mod repository;

pub use entity::{CarouselImage, CarouselImageId, NewCarouselImage};
pub use repository::CarouselImageRepository;
