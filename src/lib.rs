//! Article service layer: SQLite-backed CRUD with a Redis update queue.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
