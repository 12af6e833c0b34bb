// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod messaging;
pub mod repos;
pub mod time;

pub use messaging::{
    FailingConsumer, FailingPublisher, InFlightConsumer, RecordingPublisher, ScriptedConsumer,
};
pub use repos::{EmptyArticleReader, FailingArticleStore, FailingAuthorRepo};
pub use time::{FixedClock, fixed_now};
