pub mod content;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use content::{BlockKind, ContentBlock, storage_key_from_url};
pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleId, ArticleStatus, ArticleTitle};
