// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_author;

pub use error::map_sqlx;
pub use sqlite_article::SqliteArticleRepository;
pub use sqlite_author::SqliteAuthorRepository;
