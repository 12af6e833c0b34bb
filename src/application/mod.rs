pub mod articles;
pub mod authors;
pub mod consumers;
pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationResult;
