use super::error::{db_id, map_sqlx};
use crate::domain::author::{Author, AuthorId, AuthorRepository, NewAuthor};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: SqlitePool,
}

impl SqliteAuthorRepository {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::try_from(row.id)?,
            username: row.username,
            email: row.email,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let NewAuthor {
            username,
            email,
            created_at,
        } = author;

        if username.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }

        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (username, email, created_at) VALUES (?, ?, ?) RETURNING id, username, email, created_at",
        )
        .bind(username)
        .bind(email)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Author::try_from(row)
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let Some(id) = db_id(id.get()) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, username, email, created_at FROM authors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }
}
