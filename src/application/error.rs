// src/application/error.rs
use crate::domain::{article::ArticleId, errors::DomainError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// The article row is committed even though the caller receives an error.
    #[error("article {article_id} was stored but its author could not be resolved: {source}")]
    AuthorUnresolved {
        article_id: ArticleId,
        #[source]
        source: DomainError,
    },

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// True only for point lookups that matched no row.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_))
        )
    }

    /// Id of an article that was persisted despite the error, if any.
    #[must_use]
    pub const fn stored_article_id(&self) -> Option<ArticleId> {
        match self {
            Self::AuthorUnresolved { article_id, .. } => Some(*article_id),
            _ => None,
        }
    }
}
