// tests/support/builders.rs
use crafted::application::articles::{SaveArticleCommand, UpdateArticleCommand};

pub struct SaveArticleBuilder {
    title: String,
    body: String,
    author_id: u64,
}

impl SaveArticleBuilder {
    pub fn new(author_id: u64) -> Self {
        Self {
            title: "Test Article".into(),
            body: "Test body".into(),
            author_id,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> SaveArticleCommand {
        SaveArticleCommand {
            title: self.title,
            body: self.body,
            author_id: self.author_id,
        }
    }
}

pub fn update_command(id: u64, title: &str, body: &str) -> UpdateArticleCommand {
    UpdateArticleCommand {
        id,
        title: title.into(),
        body: body.into(),
    }
}
