use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Articles matching `status` (all statuses when None), newest first,
    /// truncated to `limit`. An empty result is a success.
    async fn list(&self, status: Option<ArticleStatus>, limit: u32) -> DomainResult<Vec<Article>>;
    /// Most recent published article flagged as main-featured. The flag is
    /// not unique; recency resolves the ambiguity.
    async fn find_main_featured(&self) -> DomainResult<Option<Article>>;
}
