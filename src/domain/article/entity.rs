// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::author::{Author, AuthorId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: AuthorId,
    /// Populated only when the author was preloaded alongside the article.
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Article {
    #[must_use]
    pub const fn is_soft_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    #[must_use]
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    #[must_use]
    pub const fn new(
        title: ArticleTitle,
        body: ArticleBody,
        author_id: AuthorId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            body,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Title and body replacement; timestamps are refreshed by the queue consumer.
#[derive(Debug, Clone)]
pub struct ArticleContent {
    pub title: ArticleTitle,
    pub body: ArticleBody,
}
