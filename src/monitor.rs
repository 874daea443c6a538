//! Polling loop: fetch, parse and evaluate on a fixed interval
//!
//! The loop is a small state machine:
//!
//! ```text
//! Polling --ok--> Evaluating --> Polling
//! Polling --err-> Counting --> Polling | Terminated
//! ```
//!
//! A successful poll resets the consecutive error count. Reaching the error
//! limit prints [`TERMINAL_MESSAGE`] and ends the loop.

use std::io::Write;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::common::errors::Result;
use crate::common::traits::StatsSource;
use crate::common::types::StatsSample;
use crate::config::types::{MonitorSettings, Thresholds};
use crate::stats::{evaluate, parse_stats, report};

/// Printed once when the monitor gives up
pub const TERMINAL_MESSAGE: &str = "Unable to fetch server statistic";

/// Counts consecutive failed polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCounter {
    count: u32,
    limit: u32,
}

impl ErrorCounter {
    pub fn new(limit: u32) -> Self {
        Self { count: 0, limit }
    }

    /// Record a failure. Returns true once the limit is reached.
    pub fn record_failure(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        self.is_exhausted()
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn is_exhausted(&self) -> bool {
        self.count >= self.limit
    }
}

/// Where the loop currently is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonitorState {
    Polling,
    Evaluating(StatsSample),
    Counting,
    Terminated,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Poll succeeded; `violations` lines were reported
    Healthy { violations: usize },
    /// Poll failed, monitor keeps going
    Failed { consecutive: u32 },
    /// Error limit reached
    Terminated,
}

/// Drives a [`StatsSource`] through the fetch/parse/evaluate pipeline
pub struct Monitor<S: StatsSource> {
    source: S,
    thresholds: Thresholds,
    poll_interval: Duration,
    retry_delay: Duration,
    errors: ErrorCounter,
    state: MonitorState,
}

impl<S: StatsSource> Monitor<S> {
    pub fn new(source: S, settings: &MonitorSettings) -> Self {
        Self::with_timing(
            source,
            settings.poll_interval(),
            settings.retry_delay(),
            settings.max_consecutive_errors,
        )
    }

    /// Create a monitor with explicit timing and error limit
    pub fn with_timing(
        source: S,
        poll_interval: Duration,
        retry_delay: Duration,
        max_consecutive_errors: u32,
    ) -> Self {
        Self {
            source,
            thresholds: Thresholds::DEFAULT,
            poll_interval,
            retry_delay,
            errors: ErrorCounter::new(max_consecutive_errors),
            state: MonitorState::Polling,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn consecutive_errors(&self) -> u32 {
        self.errors.count()
    }

    /// Fetch and parse one sample
    pub async fn poll(&self) -> Result<StatsSample> {
        let raw = self.source.fetch().await?;
        parse_stats(&raw)
    }

    /// Run one iteration of the state machine, writing reports to `out`.
    ///
    /// Poll failures are absorbed into the error count; any other error
    /// (writing to `out`, a broken source) is returned.
    pub async fn tick<W: Write>(&mut self, out: &mut W) -> Result<TickOutcome> {
        if self.state == MonitorState::Terminated {
            return Ok(TickOutcome::Terminated);
        }
        self.state = MonitorState::Polling;

        match self.poll().await {
            Ok(sample) => {
                self.errors.reset();
                self.state = MonitorState::Evaluating(sample);

                let violations = evaluate(&sample, &self.thresholds);
                for violation in &violations {
                    warn!(metric = %violation.metric(), "{}", violation);
                }
                report(&violations, out)?;

                self.state = MonitorState::Polling;
                Ok(TickOutcome::Healthy {
                    violations: violations.len(),
                })
            }
            Err(e) if !e.is_poll_failure() => Err(e),
            Err(e) => {
                self.state = MonitorState::Counting;
                let exhausted = self.errors.record_failure();
                warn!(
                    error = %e,
                    consecutive = self.errors.count(),
                    limit = self.errors.limit(),
                    "Failed to poll server stats"
                );

                if exhausted {
                    error!(source = %self.source.describe(), "Error limit reached, stopping");
                    writeln!(out, "{}", TERMINAL_MESSAGE)?;
                    out.flush()?;
                    self.state = MonitorState::Terminated;
                    return Ok(TickOutcome::Terminated);
                }

                self.state = MonitorState::Polling;
                Ok(TickOutcome::Failed {
                    consecutive: self.errors.count(),
                })
            }
        }
    }

    /// Poll until the error limit is reached
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        info!(
            source = %self.source.describe(),
            poll_interval = ?self.poll_interval,
            retry_delay = ?self.retry_delay,
            "Monitor started"
        );

        loop {
            let delay = match self.tick(out).await? {
                TickOutcome::Healthy { .. } => self.poll_interval,
                TickOutcome::Failed { .. } => self.retry_delay,
                TickOutcome::Terminated => return Ok(()),
            };
            tokio::time::sleep(delay).await;
        }
    }
}
