//! Stats Monitor Library
//!
//! Polls a server statistics endpoint, parses the comma-separated payload
//! and reports metrics that cross their alert thresholds.

pub mod common;
pub mod config;
pub mod monitor;
pub mod stats;

// Re-export commonly used types
pub use common::errors::{MonitorError, Result};
pub use common::traits::StatsSource;
pub use common::types::{Metric, StatsSample, Violation};
pub use crate::config::types::{AppConfig, MonitorSettings, ServerConfig, Thresholds};
pub use monitor::{ErrorCounter, Monitor, MonitorState, TickOutcome, TERMINAL_MESSAGE};
pub use stats::{evaluate, parse_stats, report, StatsFetcher};
