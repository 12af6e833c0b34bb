// src/domain/author/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Author, NewAuthor};
pub use repository::AuthorRepository;
pub use value_objects::AuthorId;
