// src/infrastructure/repositories/sqlite_article.rs
use super::error::{db_id, map_sqlx};
use crate::domain::article::{
    Article, ArticleBody, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::author::{Author, AuthorId};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

macro_rules! select_with_author {
    ($tail:literal) => {
        concat!(
            "SELECT a.id, a.title, a.body, a.author_id, a.created_at, a.updated_at, a.deleted_at, ",
            "au.id AS author_ref_id, au.username AS author_username, au.email AS author_email, ",
            "au.created_at AS author_created_at ",
            "FROM articles a LEFT JOIN authors au ON au.id = a.author_id",
            $tail
        )
    };
}

/// Implements both article ports over one pool.
#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: SqlitePool,
}

impl SqliteArticleRepository {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    #[sqlx(default)]
    author_ref_id: Option<i64>,
    #[sqlx(default)]
    author_username: Option<String>,
    #[sqlx(default)]
    author_email: Option<String>,
    #[sqlx(default)]
    author_created_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let author = match (
            row.author_ref_id,
            row.author_username,
            row.author_email,
            row.author_created_at,
        ) {
            (Some(id), Some(username), Some(email), Some(created_at)) => Some(Author {
                id: AuthorId::try_from(id)?,
                username,
                email,
                created_at,
            }),
            _ => None,
        };

        Ok(Article {
            id: ArticleId::try_from(row.id)?,
            title: ArticleTitle::from(row.title),
            body: ArticleBody::from(row.body),
            author_id: AuthorId::try_from(row.author_id)?,
            author,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            author_id,
            created_at,
            updated_at,
        } = article;

        let author_id = db_id(author_id.get()).ok_or_else(|| {
            DomainError::Validation(format!("author id {author_id} is out of range"))
        })?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, body, author_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING id, title, body, author_id, created_at, updated_at, deleted_at",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(author_id)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update_content(&self, id: ArticleId, content: &ArticleContent) -> DomainResult<u64> {
        let Some(id) = db_id(id.get()) else {
            return Ok(0);
        };

        let result = sqlx::query("UPDATE articles SET title = ?, body = ? WHERE id = ?")
            .bind(content.title.as_str())
            .bind(content.body.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let Some(id) = db_id(id.get()) else {
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn soft_delete_all(&self, deleted_at: DateTime<Utc>) -> DomainResult<u64> {
        let result = sqlx::query("UPDATE articles SET deleted_at = ?")
            .bind(deleted_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn touch_updated_at(
        &self,
        id: ArticleId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let Some(id) = db_id(id.get()) else {
            return Ok(0);
        };

        let result = sqlx::query("UPDATE articles SET updated_at = ? WHERE id = ?")
            .bind(updated_at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let Some(id) = db_id(id.get()) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ArticleRow>(select_with_author!(" WHERE a.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(select_with_author!(" ORDER BY a.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
