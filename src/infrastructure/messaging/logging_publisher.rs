use crate::application::ApplicationResult;
use crate::application::ports::messaging::MessagePublisher;
use async_trait::async_trait;

/// Publisher used when no broker is configured: messages only reach the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPublisher;

#[async_trait]
impl MessagePublisher for LoggingPublisher {
    async fn send(&self, topic: &str, payload: &str) -> ApplicationResult<()> {
        tracing::info!(topic, payload, "no message broker configured, dropping message");
        Ok(())
    }
}
