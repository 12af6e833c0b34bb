// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of timestamps for created/updated/deleted columns.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
