// src/domain/article/value_objects.rs
use crate::domain::errors::DomainError;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(u64);

impl ArticleId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ArticleId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for u64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for ArticleId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid article id {value}")))
    }
}

impl FromStr for ArticleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid article id {s:?}")))
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Article title. Any text is accepted, including an empty string, so rows
/// written by other tools always load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
#[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for ArticleTitle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody(String);

impl ArticleBody {
#[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for ArticleBody {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ArticleBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_parses_queue_payload() {
        let id: ArticleId = " 42 ".parse().unwrap();
        assert_eq!(id, ArticleId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn article_id_rejects_garbage() {
        assert!(matches!(
            "forty-two".parse::<ArticleId>(),
            Err(DomainError::Validation(_))
        ));
        assert!("-1".parse::<ArticleId>().is_err());
    }

    #[test]
    fn article_id_from_negative_row_fails() {
        assert!(ArticleId::try_from(-5_i64).is_err());
        assert_eq!(ArticleId::try_from(7_i64).unwrap().get(), 7);
    }

    #[test]
    fn title_and_body_keep_text_verbatim() {
        assert_eq!(ArticleTitle::new("   ").as_str(), "   ");
        assert_eq!(ArticleBody::new("").into_inner(), "");
        assert_eq!(ArticleTitle::from("T".to_string()).to_string(), "T");
    }
}
