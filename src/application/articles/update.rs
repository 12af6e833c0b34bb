use super::ArticleService;
use crate::{
    application::{
        dto::UpdateOutcome,
        error::ApplicationResult,
        ports::messaging::UPDATED_AT_TOPIC,
    },
    domain::article::{ArticleBody, ArticleContent, ArticleId, ArticleTitle},
};

pub struct UpdateArticleCommand {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl ArticleService {
    /// Replaces title and body. `updated_at` is left to the queue consumer,
    /// which is notified only once the updated row has been read back.
    ///
    /// # Errors
    ///
    /// Returns the store error when the update statement itself fails.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<UpdateOutcome> {
        let UpdateArticleCommand { id, title, body } = command;
        let id = ArticleId::new(id);
        let content = ArticleContent {
            title: ArticleTitle::from(title),
            body: ArticleBody::from(body),
        };

        let matched = self
            .write_repo
            .update_content(id, &content)
            .await
            .inspect_err(|err| {
                tracing::error!(
                    operation = "update_article",
                    article_id = %id,
                    error = %err,
                    "cannot update article"
                );
            })?;

        if matched == 0 {
            tracing::warn!(operation = "update_article", article_id = %id, "no article matched");
            return Ok(UpdateOutcome::Unmatched { id: id.get() });
        }

        // the write is committed from here on; a failed reload must not turn it into an error
        match self.read_repo.find_by_id(id).await {
            Ok(Some(article)) => {
                self.notify_updated(id).await;
                Ok(UpdateOutcome::Updated {
                    article: article.into(),
                })
            }
            Ok(None) => {
                tracing::warn!(
                    operation = "update_article",
                    article_id = %id,
                    "article removed before it could be reloaded"
                );
                Ok(UpdateOutcome::Unmatched { id: id.get() })
            }
            Err(err) => {
                tracing::error!(
                    operation = "update_article",
                    article_id = %id,
                    error = %err,
                    "article updated but cannot be reloaded"
                );
                Ok(UpdateOutcome::Unconfirmed { id: id.get() })
            }
        }
    }

    async fn notify_updated(&self, id: ArticleId) {
        let payload = id.to_string();
        if let Err(err) = self.publisher.send(UPDATED_AT_TOPIC, &payload).await {
            tracing::warn!(
                operation = "update_article",
                article_id = %id,
                topic = UPDATED_AT_TOPIC,
                error = %err,
                "cannot publish update notification"
            );
        }
    }
}
