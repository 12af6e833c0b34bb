use super::ArticleService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

impl ArticleService {
    /// Hard delete. An id with no row still reports success.
    ///
    /// # Errors
    ///
    /// The store error. A missing row is not an error.
    pub async fn delete_by_id(&self, id: u64) -> ApplicationResult<()> {
        let id = ArticleId::new(id);
        let affected = self.write_repo.delete(id).await.inspect_err(|err| {
            tracing::error!(
                operation = "delete_by_id",
                article_id = %id,
                error = %err,
                "cannot delete article"
            );
        })?;

        tracing::debug!(operation = "delete_by_id", article_id = %id, affected, "article deleted");
        Ok(())
    }

    /// Soft-deletes the whole table, rows already marked included.
    ///
    /// # Errors
    ///
    /// The store error.
    pub async fn delete_all_articles(&self) -> ApplicationResult<u64> {
        let now = self.clock.now();
        let affected = self.write_repo.soft_delete_all(now).await.inspect_err(|err| {
            tracing::error!(
                operation = "delete_all_articles",
                error = %err,
                "cannot soft-delete articles"
            );
        })?;

        tracing::warn!(
            operation = "delete_all_articles",
            affected,
            "soft-deleted every article"
        );
        Ok(affected)
    }
}
