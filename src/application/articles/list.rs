use super::ArticleService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleService {
    /// Every article, soft-deleted ones included, with authors preloaded.
    ///
    /// # Errors
    ///
    /// The store error; no partial list is returned.
    pub async fn get_all_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await.inspect_err(|err| {
            tracing::error!(operation = "get_all_articles", error = %err, "cannot fetch articles");
        })?;

        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }
}
