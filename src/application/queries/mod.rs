pub mod articles;
pub mod carousel;
pub mod media;
