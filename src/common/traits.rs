//! Trait definitions for stats sources

use async_trait::async_trait;

use super::errors::Result;

/// A source of raw stats payloads.
///
/// The HTTP fetcher is the production implementation; the monitor loop only
/// depends on this trait so it can be driven by a mock in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch one raw payload
    async fn fetch(&self) -> Result<String>;

    /// Human-readable description of where the stats come from
    fn describe(&self) -> String;
}
