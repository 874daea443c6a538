//! Core data types shared across the pipeline

use std::fmt;

/// Number of fields in a stats payload
pub const FIELD_COUNT: usize = 7;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One poll's worth of server statistics.
///
/// Field order matches the wire payload:
/// load average, total/used memory, total/used disk, total/used network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSample {
    values: [f64; FIELD_COUNT],
}

impl StatsSample {
    pub fn new(values: [f64; FIELD_COUNT]) -> Self {
        Self { values }
    }

    pub fn load_average(&self) -> f64 {
        self.values[0]
    }

    pub fn total_memory(&self) -> f64 {
        self.values[1]
    }

    pub fn used_memory(&self) -> f64 {
        self.values[2]
    }

    /// Total disk in bytes
    pub fn total_disk(&self) -> f64 {
        self.values[3]
    }

    /// Used disk in bytes
    pub fn used_disk(&self) -> f64 {
        self.values[4]
    }

    /// Total network bandwidth in bytes per second
    pub fn total_network(&self) -> f64 {
        self.values[5]
    }

    /// Used network bandwidth in bytes per second
    pub fn used_network(&self) -> f64 {
        self.values[6]
    }

    /// Values in payload order
    pub fn as_array(&self) -> &[f64; FIELD_COUNT] {
        &self.values
    }
}

/// The metric a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Load,
    Memory,
    Disk,
    Network,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Load => write!(f, "load"),
            Metric::Memory => write!(f, "memory"),
            Metric::Disk => write!(f, "disk"),
            Metric::Network => write!(f, "network"),
        }
    }
}

/// A metric that crossed its threshold, with the value to report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    /// Load average
    Load(f64),
    /// Memory usage in percent
    Memory(f64),
    /// Free disk space in bytes
    Disk(f64),
    /// Free network bandwidth in bytes per second
    Network(f64),
}

impl Violation {
    pub fn metric(&self) -> Metric {
        match self {
            Violation::Load(_) => Metric::Load,
            Violation::Memory(_) => Metric::Memory,
            Violation::Disk(_) => Metric::Disk,
            Violation::Network(_) => Metric::Network,
        }
    }
}

// `as i64` truncates toward zero, which is what the report wants.
impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::Load(load) => write!(f, "Load Average is too high: {}", load as i64),
            Violation::Memory(percent) => {
                write!(f, "Memory usage too high: {}%", percent as i64)
            }
            Violation::Disk(free_bytes) => write!(
                f,
                "Free disk space is too low: {} Mb left",
                (free_bytes / BYTES_PER_MB) as i64
            ),
            Violation::Network(free_bytes_per_sec) => write!(
                f,
                "Network bandwidth usage high: {} Mbit/s available",
                (free_bytes_per_sec * 8.0 / BYTES_PER_MB) as i64
            ),
        }
    }
}
