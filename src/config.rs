// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    redis_url: Option<String>,
    queue_poll_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://crafted.db?mode=rwc".into()
}

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_QUEUE_POLL_TIMEOUT_SECS: u64 = 5;

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` for numeric settings that are not positive integers.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_database_url);

        let database_max_connections =
            parse_positive(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let redis_url = lookup("REDIS_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let poll_secs = parse_positive(
            &lookup,
            "QUEUE_POLL_TIMEOUT_SECS",
            DEFAULT_QUEUE_POLL_TIMEOUT_SECS,
        )?;

        Ok(Self {
            database_url,
            database_max_connections,
            redis_url,
            queue_poll_timeout: Duration::from_secs(poll_secs),
        })
    }

    #[must_use]
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    #[must_use]
    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    #[must_use]
    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }

    /// Redis URL for commands that cannot run without a broker.
    ///
    /// # Errors
    ///
    /// `ConfigError::Missing` when `REDIS_URL` is unset.
    pub fn require_redis_url(&self) -> Result<&str, ConfigError> {
        self.redis_url().ok_or(ConfigError::Missing("REDIS_URL"))
    }

    #[must_use]
    pub const fn queue_poll_timeout(&self) -> Duration {
        self.queue_poll_timeout
    }
}

fn parse_positive<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + From<u8> + Copy,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) if value >= T::from(1) => Ok(value),
            _ => Err(ConfigError::Invalid(format!(
                "{key} must be a positive integer, got {raw:?}"
            ))),
        },
    }
}
