// src/application/ports/mod.rs
pub mod messaging;
pub mod time;
