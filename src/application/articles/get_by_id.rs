use super::ArticleService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl ArticleService {
    /// # Errors
    ///
    /// `NotFound` when no row has `id`, otherwise the store error.
    pub async fn fetch_article_by_id(&self, id: u64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id);
        let article = self.read_repo.find_by_id(id).await.inspect_err(|err| {
            tracing::error!(
                operation = "fetch_article_by_id",
                article_id = %id,
                error = %err,
                "cannot fetch article by id"
            );
        })?;

        match article {
            Some(article) => Ok(article.into()),
            None => {
                tracing::warn!(
                    operation = "fetch_article_by_id",
                    article_id = %id,
                    "article not found"
                );
                Err(ApplicationError::not_found(format!("article {id} not found")))
            }
        }
    }
}
