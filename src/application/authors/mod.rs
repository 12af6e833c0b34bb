// src/application/authors/mod.rs
mod register;

pub use register::{AuthorService, RegisterAuthorCommand};
