//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{MonitorError, Result};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "STATS_MONITOR";

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with STATS_MONITOR__)
/// 2. Configuration file (TOML format), if it exists
/// 3. Default values
///
/// The result is validated before it is returned.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    // e.g. STATS_MONITOR__SERVER__STATS_URL
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config: AppConfig = builder
        .build()
        .map_err(|e| MonitorError::Configuration(e.to_string()))?
        .try_deserialize()
        .map_err(|e| MonitorError::Configuration(e.to_string()))?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Some("/nonexistent/stats_monitor.toml")).unwrap();
        assert_eq!(config.settings.poll_interval_seconds, 10);
        assert_eq!(config.settings.max_consecutive_errors, 3);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = write_temp_config(
            "stats-monitor-override",
            r#"
[server]
stats_url = "http://127.0.0.1:8080/_stats"

[settings]
poll_interval_seconds = 30
"#,
        );

        let config = load_config(path.to_str()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.server.stats_url, "http://127.0.0.1:8080/_stats");
        assert_eq!(config.settings.poll_interval_seconds, 30);
        // untouched keys keep their defaults
        assert_eq!(config.server.request_timeout_seconds, 10);
        assert_eq!(config.settings.retry_delay_seconds, 5);
    }

    #[test]
    fn test_invalid_file_values_rejected() {
        let path = write_temp_config(
            "stats-monitor-invalid",
            r#"
[settings]
max_consecutive_errors = 0
"#,
        );

        let result = load_config(path.to_str());
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(MonitorError::Configuration(_))));
    }
}
