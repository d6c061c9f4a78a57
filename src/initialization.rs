//! Initialization of shared resources: logger, HTTP client, semaphore.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use reqwest::ClientBuilder;
use tokio::sync::Semaphore;

use crate::config::{Config, LogFormat};
use crate::error_handling::InitializationError;

/// Initializes the global logger with the given level and output format.
///
/// Plain format is colored and human-readable; JSON format emits one object
/// per line for machine parsing.
pub fn init_logger_with(
    level: log::LevelFilter,
    format: LogFormat,
) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "ts": chrono::Utc::now().to_rfc3339(),
                    "level": record.level().to_string(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = match record.level() {
                    log::Level::Error => "ERROR".red().bold(),
                    log::Level::Warn => "WARN".yellow().bold(),
                    log::Level::Info => "INFO".green(),
                    log::Level::Debug => "DEBUG".blue(),
                    log::Level::Trace => "TRACE".dimmed(),
                };
                writeln!(
                    buf,
                    "{} [{}] {}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                    level,
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;
    Ok(())
}

/// Builds the shared HTTP client used for container fetches.
pub async fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Creates the concurrency-limiting semaphore for the run loop.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
