// src/application/articles/mod.rs
mod delete;
mod get_by_id;
mod list;
mod save;
mod service;
mod update;

pub use save::SaveArticleCommand;
pub use service::ArticleService;
pub use update::UpdateArticleCommand;
