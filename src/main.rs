//! Stats Monitor - Main Entry Point
//!
//! Polls the server statistics endpoint every few seconds and prints a
//! warning line for each metric over its threshold.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use stats_monitor::config::load_config;
use stats_monitor::{Monitor, StatsFetcher};

/// CLI arguments for the application
///
/// Running with no flags, no config file and no environment overrides
/// reproduces the fixed behaviour: the default URL, 10s interval, 5s retry
/// and a limit of 3 consecutive failures.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (optional, defaults apply when missing)
    #[arg(short, long, default_value = "stats_monitor.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(Some(args.config.as_str()))?;

    // Initialize logging; stdout is reserved for reports
    let level = parse_level(args.log_level.as_deref().unwrap_or(&config.settings.log_level));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting stats monitor");
    info!("Configuration file: {}", args.config);
    info!(
        url = %config.server.stats_url,
        timeout_seconds = config.server.request_timeout_seconds,
        "Stats endpoint"
    );

    let fetcher = StatsFetcher::from_config(&config.server)?;
    let mut monitor = Monitor::new(fetcher, &config.settings);

    let mut stdout = std::io::stdout();
    monitor.run(&mut stdout).await?;

    info!("Monitor stopped after repeated failures");
    Ok(())
}
