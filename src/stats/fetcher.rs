//! HTTP client for the stats endpoint

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::common::errors::{MonitorError, Result};
use crate::common::traits::StatsSource;
use crate::config::types::ServerConfig;

/// Fetches the raw stats payload with a single GET request
#[derive(Debug, Clone)]
pub struct StatsFetcher {
    /// HTTP client
    client: Client,
    /// Stats endpoint URL
    url: String,
}

impl StatsFetcher {
    /// Create a new fetcher with the default 10 second timeout
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(10))
    }

    /// Create a new fetcher with custom timeout
    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MonitorError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Create a fetcher from the server section of the config
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::with_timeout(&config.stats_url, config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StatsSource for StatsFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<String> {
        debug!("Fetching server stats");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(MonitorError::Fetch(format!(
                "Server returned status {}",
                status
            )));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Received stats payload");
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
