//! Error types for the monitor

use thiserror::Error;

/// Result type alias using our MonitorError
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Main error type for monitor operations
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Network failure, timeout or non-200 response from the stats endpoint
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Payload did not contain the expected number of fields
    #[error("Unexpected data format: expected {expected} fields, found {found}")]
    Format { expected: usize, found: usize },

    /// A payload field could not be parsed as a number
    #[error("Invalid numeric value at field {index}: {value:?}")]
    Numeric { index: usize, value: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failure writing a report line
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MonitorError {
    /// Whether this error counts towards the consecutive failure limit.
    pub fn is_poll_failure(&self) -> bool {
        matches!(
            self,
            MonitorError::Fetch(_) | MonitorError::Format { .. } | MonitorError::Numeric { .. }
        )
    }
}

impl From<reqwest::Error> for MonitorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MonitorError::Fetch(format!("request timed out: {}", err))
        } else {
            MonitorError::Fetch(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_failures() {
        assert!(MonitorError::Fetch("down".to_string()).is_poll_failure());
        assert!(MonitorError::Format { expected: 7, found: 3 }.is_poll_failure());
        assert!(MonitorError::Numeric {
            index: 2,
            value: "x".to_string()
        }
        .is_poll_failure());
    }

    #[test]
    fn test_non_poll_failures() {
        assert!(!MonitorError::Configuration("bad".to_string()).is_poll_failure());
        assert!(!MonitorError::Internal("bad".to_string()).is_poll_failure());
    }

    #[test]
    fn test_error_messages() {
        let err = MonitorError::Format { expected: 7, found: 3 };
        assert_eq!(
            err.to_string(),
            "Unexpected data format: expected 7 fields, found 3"
        );

        let err = MonitorError::Numeric {
            index: 2,
            value: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid numeric value at field 2: \"x\"");
    }
}
