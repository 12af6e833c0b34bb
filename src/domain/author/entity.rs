// src/domain/author/entity.rs
use crate::domain::author::value_objects::AuthorId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
