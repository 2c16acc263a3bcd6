//! HTTP listener and logging settings

use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::error::ConfigError;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// How the API listens and logs.
///
/// `WEBINARS__SERVER__LISTEN=127.0.0.1:3000`
/// `WEBINARS__SERVER__LOG_FORMAT=json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket the API binds to
    pub listen: SocketAddr,

    /// Per-request deadline in seconds
    pub request_timeout_secs: u64,

    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,

    pub log_format: LogFormat,
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen.port() == 0 {
            return Err(ConfigError::invalid(
                "WEBINARS__SERVER__LISTEN",
                "port must not be 0",
            ));
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ConfigError::invalid(
                "WEBINARS__SERVER__REQUEST_TIMEOUT_SECS",
                format!("must be between 1 and {MAX_REQUEST_TIMEOUT_SECS}"),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "WEBINARS__SERVER__LOG_FILTER",
            });
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            request_timeout_secs: 30,
            log_filter: "info,webinars=debug,sqlx=warn".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
