// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by article and author stores.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed ids or values the store refused (check constraints).
    #[error("invalid input: {0}")]
    Validation(String),
    /// Unique constraint hit, e.g. a duplicate author username.
    #[error("already exists: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Anything the database itself failed on: I/O, locks, decoding.
    #[error("store failure: {0}")]
    Persistence(String),
}

impl DomainError {
    #[must_use]
    pub const fn is_store_failure(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}
