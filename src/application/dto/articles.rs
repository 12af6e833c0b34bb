use crate::domain::{article::Article, author::Author};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.get(),
            username: author.username,
            email: author.email,
            created_at: author.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub author_id: u64,
    #[serde(default)]
    pub author: Option<AuthorDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.get(),
            title: article.title.into_inner(),
            body: article.body.into_inner(),
            author_id: article.author_id.get(),
            author: article.author.map(AuthorDto::from),
            created_at: article.created_at,
            updated_at: article.updated_at,
            deleted_at: article.deleted_at,
        }
    }
}

/// Result of a content update; only `Updated` is announced on the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateOutcome {
    Updated { article: ArticleDto },
    Unmatched { id: u64 },
    /// The new content was written but the row could not be read back.
    Unconfirmed { id: u64 },
}

impl UpdateOutcome {
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    #[must_use]
    pub const fn article(&self) -> Option<&ArticleDto> {
        match self {
            Self::Updated { article } => Some(article),
            Self::Unmatched { .. } | Self::Unconfirmed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        article::{ArticleBody, ArticleId, ArticleTitle},
        author::AuthorId,
    };

    #[test]
    fn article_dto_flattens_value_objects() {
        let now = Utc::now();
        let article = Article {
            id: ArticleId::new(5),
            title: ArticleTitle::new("Hello"),
            body: ArticleBody::new("World"),
            author_id: AuthorId::new(2),
            author: Some(Author {
                id: AuthorId::new(2),
                username: "grace".into(),
                email: "grace@example.com".into(),
                created_at: now,
            }),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let dto = ArticleDto::from(article);
        assert_eq!(dto.id, 5);
        assert_eq!(dto.title, "Hello");
        assert_eq!(dto.author.as_ref().map(|a| a.id), Some(2));
    }

    #[test]
    fn update_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(UpdateOutcome::Unmatched { id: 42 }).unwrap();
        assert_eq!(json["status"], "unmatched");
        assert_eq!(json["id"], 42);
        assert!(!UpdateOutcome::Unmatched { id: 42 }.is_updated());
    }

    #[test]
    fn unconfirmed_update_has_no_article() {
        let outcome = UpdateOutcome::Unconfirmed { id: 7 };
        assert!(outcome.article().is_none());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "unconfirmed");
    }
}
