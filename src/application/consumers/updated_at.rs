// src/application/consumers/updated_at.rs
use std::{future::Future, sync::Arc, time::Duration};

use crate::{
    application::{
        error::ApplicationResult,
        ports::{
            messaging::{MessageConsumer, UPDATED_AT_TOPIC},
            time::Clock,
        },
    },
    domain::article::{ArticleId, ArticleWriteRepository},
};

/// Refreshes `updated_at` for ids announced by `ArticleService::update_article`.
pub struct UpdatedAtConsumer {
    consumer: Arc<dyn MessageConsumer>,
    write_repo: Arc<dyn ArticleWriteRepository>,
    clock: Arc<dyn Clock>,
    poll_timeout: Duration,
}

impl UpdatedAtConsumer {
    #[must_use]
    pub const fn new(
        consumer: Arc<dyn MessageConsumer>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        clock: Arc<dyn Clock>,
        poll_timeout: Duration,
    ) -> Self {
        Self {
            consumer,
            write_repo,
            clock,
            poll_timeout,
        }
    }

    /// Applies one payload. Returns whether a row was touched; bad payloads
    /// and store failures are logged and reported as `false`.
    pub async fn handle(&self, payload: &str) -> bool {
        let id = match payload.parse::<ArticleId>() {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(topic = UPDATED_AT_TOPIC, payload, error = %err, "skipping message");
                return false;
            }
        };

        match self.write_repo.touch_updated_at(id, self.clock.now()).await {
            Ok(0) => {
                tracing::warn!(article_id = %id, "updated_at target no longer exists");
                false
            }
            Ok(_) => {
                tracing::debug!(article_id = %id, "updated_at refreshed");
                true
            }
            Err(err) => {
                tracing::error!(article_id = %id, error = %err, "cannot refresh updated_at");
                false
            }
        }
    }

    /// Consumes until `shutdown` resolves; returns the number of rows touched.
    ///
    /// Shutdown is only checked between polls: a receive that is already
    /// waiting on the broker runs to completion and its payload is applied.
    ///
    /// # Errors
    ///
    /// Stops at the first failed receive and returns that error.
    pub async fn run<F>(&self, shutdown: F) -> ApplicationResult<u64>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut touched = 0_u64;

        tracing::info!(topic = UPDATED_AT_TOPIC, "consumer started");
        loop {
            let stop = tokio::select! {
                biased;
                () = &mut shutdown => true,
                () = std::future::ready(()) => false,
            };
            if stop {
                break;
            }

            let Some(payload) = self
                .consumer
                .receive(UPDATED_AT_TOPIC, self.poll_timeout)
                .await?
            else {
                continue;
            };
            if self.handle(&payload).await {
                touched += 1;
            }
        }
        tracing::info!(topic = UPDATED_AT_TOPIC, touched, "consumer stopped");

        Ok(touched)
    }
}
