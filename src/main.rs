//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `gtm_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use gtm_status::initialization::init_logger_with;
use gtm_status::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the scan using the library
    match run_scan(config).await {
        Ok(report) => {
            println!(
                "Processed {} URL{} ({} succeeded, {} failed) in {:.1}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            if let Some(output) = report.output.as_ref() {
                println!("Reports saved in {}", output.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("gtm_status error: {:#}", e);
            process::exit(1);
        }
    }
}
