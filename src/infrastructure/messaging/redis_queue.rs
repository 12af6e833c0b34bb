// src/infrastructure/messaging/redis_queue.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::messaging::{MessageConsumer, MessagePublisher};
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

const DEFAULT_KEY_PREFIX: &str = "queue";

/// List-backed queue: producers `LPUSH`, consumers `BRPOP`, so each message
/// is delivered to exactly one consumer in FIFO order.
#[derive(Clone)]
pub struct RedisMessageQueue {
    pool: Pool,
    key_prefix: String,
}

impl RedisMessageQueue {
    /// Create a queue from a redis URL (e.g. redis://:password@host:6379/0)
    ///
    /// # Errors
    ///
    /// `Infrastructure` when the pool cannot be built from `url`.
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            pool,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        })
    }

    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn queue_key(&self, topic: &str) -> String {
        format!("{}:{}", self.key_prefix, topic)
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[async_trait]
impl MessagePublisher for RedisMessageQueue {
    async fn send(&self, topic: &str, payload: &str) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;

        conn.lpush::<_, _, ()>(self.queue_key(topic), payload)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!(topic, payload, "message queued");
        Ok(())
    }
}

#[async_trait]
impl MessageConsumer for RedisMessageQueue {
    async fn receive(&self, topic: &str, timeout: Duration) -> ApplicationResult<Option<String>> {
        let mut conn = self.connection().await?;

        let popped: Option<(String, String)> = conn
            .brpop(self.queue_key(topic), timeout.as_secs_f64())
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(popped.map(|(_key, payload)| payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queue_keys_are_namespaced_by_topic() {
        // pool creation is lazy, no server needed
        let queue = RedisMessageQueue::from_url("redis://127.0.0.1:6379/0").unwrap();
        assert_eq!(queue.queue_key("updated_at"), "queue:updated_at");

        let queue = queue.with_key_prefix("crafted");
        assert_eq!(queue.queue_key("updated_at"), "crafted:updated_at");
    }
}
