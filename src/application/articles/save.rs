use super::ArticleService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        author::AuthorId,
        errors::DomainError,
    },
};

pub struct SaveArticleCommand {
    pub title: String,
    pub body: String,
    pub author_id: u64,
}

impl ArticleService {
    /// Inserts the article, then resolves its author in a separate step.
    ///
    /// A failed author lookup does not roll back the insert: the error is
    /// [`ApplicationError::AuthorUnresolved`] and carries the stored id.
    ///
    /// # Errors
    ///
    /// The insert error, or `AuthorUnresolved` once the row exists.
    pub async fn save_article(&self, command: SaveArticleCommand) -> ApplicationResult<ArticleDto> {
        let SaveArticleCommand {
            title,
            body,
            author_id,
        } = command;

        let title = ArticleTitle::from(title);
        let body = ArticleBody::from(body);
        let author_id = AuthorId::new(author_id);

        let new_article = NewArticle::new(title, body, author_id, self.clock.now());
        let article = self.write_repo.insert(new_article).await.inspect_err(|err| {
            tracing::error!(
                operation = "save_article",
                author_id = %author_id,
                error = %err,
                "cannot create article"
            );
        })?;

        let source = match self.author_repo.find_by_id(author_id).await {
            Ok(Some(author)) => return Ok(article.with_author(author).into()),
            Ok(None) => DomainError::NotFound(format!("author {author_id} not found")),
            Err(err) => err,
        };

        tracing::error!(
            operation = "save_article",
            article_id = %article.id,
            author_id = %author_id,
            error = %source,
            "cannot fetch article's author"
        );
        Err(ApplicationError::AuthorUnresolved {
            article_id: article.id,
            source,
        })
    }
}
