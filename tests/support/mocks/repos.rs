// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crafted::domain::{
    article::{
        Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleWriteRepository,
        NewArticle,
    },
    author::{Author, AuthorId, AuthorRepository, NewAuthor},
    errors::{DomainError, DomainResult},
};

fn store_down<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database is locked".into()))
}

/// Article store whose every call fails.
pub struct FailingArticleStore;

#[async_trait]
impl ArticleWriteRepository for FailingArticleStore {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        store_down()
    }

    async fn update_content(&self, _id: ArticleId, _content: &ArticleContent) -> DomainResult<u64> {
        store_down()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<u64> {
        store_down()
    }

    async fn soft_delete_all(&self, _deleted_at: DateTime<Utc>) -> DomainResult<u64> {
        store_down()
    }

    async fn touch_updated_at(
        &self,
        _id: ArticleId,
        _updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        store_down()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleStore {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        store_down()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        store_down()
    }
}

/// Reader that finds nothing, as if every row vanished after being written.
pub struct EmptyArticleReader;

#[async_trait]
impl ArticleReadRepository for EmptyArticleReader {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(Vec::new())
    }
}

pub struct FailingAuthorRepo;

#[async_trait]
impl AuthorRepository for FailingAuthorRepo {
    async fn insert(&self, _author: NewAuthor) -> DomainResult<Author> {
        store_down()
    }

    async fn find_by_id(&self, _id: AuthorId) -> DomainResult<Option<Author>> {
        store_down()
    }
}
