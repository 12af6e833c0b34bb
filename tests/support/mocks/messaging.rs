// tests/support/mocks/messaging.rs
use std::{collections::VecDeque, sync::Mutex, time::Duration};

use async_trait::async_trait;
use crafted::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::messaging::{MessageConsumer, MessagePublisher},
};
use tokio::sync::Notify;

/// Keeps every `(topic, payload)` pair it is asked to send.
#[derive(Default)]
pub struct RecordingPublisher {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingPublisher {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagePublisher for RecordingPublisher {
    async fn send(&self, topic: &str, payload: &str) -> ApplicationResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_string()));
        Ok(())
    }
}

pub struct FailingPublisher;

#[async_trait]
impl MessagePublisher for FailingPublisher {
    async fn send(&self, _topic: &str, _payload: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("broker unavailable"))
    }
}

/// Hands out queued payloads; once empty, signals `drained` on every poll
/// and waits out the poll timeout like an idle `BRPOP`.
pub struct ScriptedConsumer {
    payloads: Mutex<VecDeque<String>>,
    pub drained: Notify,
}

impl ScriptedConsumer {
    pub fn new<I, S>(payloads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            payloads: Mutex::new(payloads.into_iter().map(Into::into).collect()),
            drained: Notify::new(),
        }
    }
}

#[async_trait]
impl MessageConsumer for ScriptedConsumer {
    async fn receive(&self, _topic: &str, timeout: Duration) -> ApplicationResult<Option<String>> {
        let next = self.payloads.lock().unwrap().pop_front();
        if next.is_none() {
            self.drained.notify_one();
            tokio::time::sleep(timeout).await;
        }
        Ok(next)
    }
}

/// Fires `in_flight` once a receive has started, then delivers its single
/// payload after `delay`; later polls come back empty.
pub struct InFlightConsumer {
    payload: Mutex<Option<String>>,
    delay: Duration,
    pub in_flight: Notify,
}

impl InFlightConsumer {
    pub fn new(payload: impl Into<String>, delay: Duration) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
            delay,
            in_flight: Notify::new(),
        }
    }
}

#[async_trait]
impl MessageConsumer for InFlightConsumer {
    async fn receive(&self, _topic: &str, timeout: Duration) -> ApplicationResult<Option<String>> {
        let next = self.payload.lock().unwrap().take();
        match next {
            Some(payload) => {
                self.in_flight.notify_one();
                tokio::time::sleep(self.delay).await;
                Ok(Some(payload))
            }
            None => {
                tokio::time::sleep(timeout).await;
                Ok(None)
            }
        }
    }
}

pub struct FailingConsumer;

#[async_trait]
impl MessageConsumer for FailingConsumer {
    async fn receive(&self, _topic: &str, _timeout: Duration) -> ApplicationResult<Option<String>> {
        Err(ApplicationError::infrastructure("connection refused"))
    }
}
