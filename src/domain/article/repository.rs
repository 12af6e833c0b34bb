use crate::domain::article::entity::{Article, ArticleContent, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Replaces title and body; returns the number of matched rows.
    async fn update_content(&self, id: ArticleId, content: &ArticleContent) -> DomainResult<u64>;
    async fn delete(&self, id: ArticleId) -> DomainResult<u64>;
    /// Stamps `deleted_at` on every row, including rows already soft-deleted.
    async fn soft_delete_all(&self, deleted_at: DateTime<Utc>) -> DomainResult<u64>;
    async fn touch_updated_at(&self, id: ArticleId, updated_at: DateTime<Utc>)
    -> DomainResult<u64>;
}

/// Reads preload the author and apply no soft-delete filter.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(&self) -> DomainResult<Vec<Article>>;
}
