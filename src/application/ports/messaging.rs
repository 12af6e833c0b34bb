// src/application/ports/messaging.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use std::time::Duration;

/// Topic carrying ids of articles whose `updated_at` still has to be refreshed.
pub const UPDATED_AT_TOPIC: &str = "updated_at";

#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// Fire-and-forget; callers log failures instead of propagating them.
    async fn send(&self, topic: &str, payload: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait MessageConsumer: Send + Sync {
    /// Waits up to `timeout` for the next payload on `topic`.
    async fn receive(&self, topic: &str, timeout: Duration) -> ApplicationResult<Option<String>>;
}
