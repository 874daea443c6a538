//! Configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::common::errors::{MonitorError, Result};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Stats endpoint configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Polling loop settings
    #[serde(default)]
    pub settings: MonitorSettings,
}

impl AppConfig {
    /// Reject configurations the monitor cannot run with
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.server.stats_url).map_err(|e| {
            MonitorError::Configuration(format!(
                "Invalid stats URL {:?}: {}",
                self.server.stats_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(MonitorError::Configuration(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(MonitorError::Configuration(
                "request_timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if self.settings.poll_interval_seconds == 0 {
            return Err(MonitorError::Configuration(
                "poll_interval_seconds must be greater than zero".to_string(),
            ));
        }
        if self.settings.retry_delay_seconds >= self.settings.poll_interval_seconds {
            return Err(MonitorError::Configuration(format!(
                "retry_delay_seconds ({}) must be shorter than poll_interval_seconds ({})",
                self.settings.retry_delay_seconds, self.settings.poll_interval_seconds
            )));
        }
        if self.settings.max_consecutive_errors == 0 {
            return Err(MonitorError::Configuration(
                "max_consecutive_errors must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Stats endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// URL returning the comma-separated stats payload
    #[serde(default = "default_stats_url")]
    pub stats_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            stats_url: default_stats_url(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn default_stats_url() -> String {
    "http://srv.msk01.gigacorp.local/_stats".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

/// Polling loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Delay between successful polls in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Delay before retrying a failed poll in seconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_seconds: u64,
    /// Consecutive failed polls before the monitor gives up
    #[serde(default = "default_max_consecutive_errors")]
    pub max_consecutive_errors: u32,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            poll_interval_seconds: default_poll_interval(),
            retry_delay_seconds: default_retry_delay(),
            max_consecutive_errors: default_max_consecutive_errors(),
        }
    }
}

impl MonitorSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_seconds)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_poll_interval() -> u64 {
    10
}

fn default_retry_delay() -> u64 {
    5
}

fn default_max_consecutive_errors() -> u32 {
    3
}

/// Alert thresholds. Fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Load average ceiling
    pub max_load_average: f64,
    /// Memory usage ceiling in percent
    pub max_memory_percent: f64,
    /// Minimum fraction of disk that must stay free
    pub min_free_disk_ratio: f64,
    /// Minimum fraction of network bandwidth that must stay free
    pub min_free_network_ratio: f64,
}

impl Thresholds {
    pub const DEFAULT: Thresholds = Thresholds {
        max_load_average: 30.0,
        max_memory_percent: 80.0,
        min_free_disk_ratio: 0.1,
        min_free_network_ratio: 0.1,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
