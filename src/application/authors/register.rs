use std::sync::Arc;

use crate::{
    application::{dto::AuthorDto, error::ApplicationResult, ports::time::Clock},
    domain::author::{AuthorRepository, NewAuthor},
};

pub struct RegisterAuthorCommand {
    pub username: String,
    pub email: String,
}

/// Seeds the author table so articles have someone to point at.
pub struct AuthorService {
    author_repo: Arc<dyn AuthorRepository>,
    clock: Arc<dyn Clock>,
}

impl AuthorService {
    #[must_use]
    pub const fn new(author_repo: Arc<dyn AuthorRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { author_repo, clock }
    }

    /// # Errors
    ///
    /// `Validation` for a blank username, `Conflict` when it is taken,
    /// otherwise the store error.
    pub async fn register_author(
        &self,
        command: RegisterAuthorCommand,
    ) -> ApplicationResult<AuthorDto> {
        let RegisterAuthorCommand { username, email } = command;
        let new_author = NewAuthor {
            username: username.trim().to_string(),
            email,
            created_at: self.clock.now(),
        };

        let author = self.author_repo.insert(new_author).await.inspect_err(|err| {
            tracing::error!(
                operation = "register_author",
                username = %username,
                error = %err,
                "cannot create author"
            );
        })?;
        tracing::info!(author_id = %author.id, "author registered");

        Ok(author.into())
    }
}
