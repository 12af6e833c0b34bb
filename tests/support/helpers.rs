// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, RecordingPublisher, fixed_now};
use crafted::{
    application::{
        articles::ArticleService,
        ports::{messaging::MessagePublisher, time::Clock},
    },
    domain::author::{Author, AuthorRepository, NewAuthor},
    infrastructure::{
        database,
        repositories::{SqliteArticleRepository, SqliteAuthorRepository},
    },
};
use sqlx::SqlitePool;

/// Single-connection in-memory database: every pooled connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn memory_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory sqlite pool");
    database::run_migrations(&pool)
        .await
        .expect("migrations apply");
    pool
}

pub struct TestContext {
    pub pool: SqlitePool,
    pub articles: Arc<SqliteArticleRepository>,
    pub authors: Arc<SqliteAuthorRepository>,
    pub publisher: Arc<RecordingPublisher>,
    pub service: ArticleService,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_clock(FixedClock::default()).await
    }

    pub async fn with_clock(clock: FixedClock) -> Self {
        let pool = memory_pool().await;
        let articles = Arc::new(SqliteArticleRepository::new(pool.clone()));
        let authors = Arc::new(SqliteAuthorRepository::new(pool.clone()));
        let publisher = Arc::new(RecordingPublisher::default());

        let service = ArticleService::new(
            articles.clone(),
            articles.clone(),
            authors.clone(),
            publisher.clone() as Arc<dyn MessagePublisher>,
            Arc::new(clock) as Arc<dyn Clock>,
        );

        Self {
            pool,
            articles,
            authors,
            publisher,
            service,
        }
    }

    pub async fn seed_author(&self, username: &str) -> Author {
        self.authors
            .insert(NewAuthor {
                username: username.into(),
                email: format!("{username}@example.com"),
                created_at: fixed_now(),
            })
            .await
            .expect("seed author")
    }

    pub async fn article_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .expect("count articles")
    }

    pub async fn soft_deleted_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE deleted_at IS NOT NULL")
            .fetch_one(&self.pool)
            .await
            .expect("count soft-deleted articles")
    }
}
