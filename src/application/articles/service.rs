// src/application/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{messaging::MessagePublisher, time::Clock},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
    },
};

pub struct ArticleService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) publisher: Arc<dyn MessagePublisher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleService {
    #[must_use]
    pub const fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        publisher: Arc<dyn MessagePublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            author_repo,
            publisher,
            clock,
        }
    }
}
