// src/application/services/mod.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        articles::ArticleService,
        authors::AuthorService,
        consumers::UpdatedAtConsumer,
        ports::{
            messaging::{MessageConsumer, MessagePublisher},
            time::Clock,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
    },
};

/// Wires every service from a single set of injected adapters.
pub struct ApplicationServices {
    pub articles: Arc<ArticleService>,
    pub authors: Arc<AuthorService>,
    article_write_repo: Arc<dyn ArticleWriteRepository>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        publisher: Arc<dyn MessagePublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let articles = Arc::new(ArticleService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&author_repo),
            Arc::clone(&publisher),
            Arc::clone(&clock),
        ));
        let authors = Arc::new(AuthorService::new(author_repo, Arc::clone(&clock)));

        Self {
            articles,
            authors,
            article_write_repo,
            clock,
        }
    }

    #[must_use]
    pub fn updated_at_consumer(
        &self,
        consumer: Arc<dyn MessageConsumer>,
        poll_timeout: Duration,
    ) -> UpdatedAtConsumer {
        UpdatedAtConsumer::new(
            consumer,
            Arc::clone(&self.article_write_repo),
            Arc::clone(&self.clock),
            poll_timeout,
        )
    }
}
