//! gtm_status library: Google Tag Manager container scanning
//!
//! This library fetches published GTM container scripts, measures their size
//! against the 200KB serving limit, extracts the embedded data payload, and
//! classifies its contents (tags, triggers, macros) into named and
//! categorized summaries.
//!
//! # Example
//!
//! ```no_run
//! use gtm_status::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("urls.txt"),
//!     max_concurrency: 20,
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!(
//!     "Processed {} URLs: {} succeeded, {} failed",
//!     report.total_urls, report.successful, report.failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

pub mod analyze;
mod app;
mod cache;
pub mod config;
pub mod detect;
mod error_handling;
pub mod export;
pub mod extract;
mod fetch;
pub mod initialization;
pub mod models;
mod utils;

// Re-export public API
pub use analyze::{classify, ContainerAnalysis, ContainerResource};
pub use cache::{AnalysisCache, TtlCache};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorStats, ErrorType};
pub use models::{ContainerReport, SizeSeverity};
pub use run::{run_scan, ScanReport};

// Internal run module (contains the main scanning logic)
mod run {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_progress, print_error_statistics, validate_and_normalize_input};
    use crate::cache::AnalysisCache;
    use crate::config::{Config, LOGGING_INTERVAL_SECS, URL_PROCESSING_TIMEOUT};
    use crate::error_handling::{ErrorStats, ErrorType};
    use crate::export::export_jsonl;
    use crate::initialization::{init_client, init_semaphore};
    use crate::models::ContainerReport;
    use crate::utils::{process_url, ProcessingContext};

    /// Results of a container scanning run.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// Total number of URLs attempted
        pub total_urls: usize,
        /// Number of URLs successfully processed
        pub successful: usize,
        /// Number of URLs that failed to process
        pub failed: usize,
        /// Where the JSONL reports were written (None means stdout)
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a container scan with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads URLs (or bare
    /// GTM-XXXXXXX ids) from the input file, processes them concurrently,
    /// and writes one JSONL report per container.
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened, the HTTP client
    /// cannot be built, or the output file cannot be written. Individual URL
    /// failures do not abort the scan; they are counted and summarized.
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let is_stdin = config.file.as_os_str() == "-";

        let mut stdin_lines = if is_stdin {
            info!("Reading URLs from stdin");
            Some(BufReader::new(tokio::io::stdin()).lines())
        } else {
            None
        };

        let mut file_lines = if !is_stdin {
            let file = tokio::fs::File::open(&config.file)
                .await
                .context("Failed to open input file")?;
            Some(BufReader::new(file).lines())
        } else {
            None
        };

        let semaphore = init_semaphore(config.max_concurrency);
        let client = init_client(&config)
            .await
            .context("Failed to initialize HTTP client")?;

        let error_stats = Arc::new(ErrorStats::new());
        let cache = Arc::new(AnalysisCache::default());
        let shared_ctx = Arc::new(ProcessingContext {
            client,
            cache,
            error_stats: Arc::clone(&error_stats),
        });

        let start_time = std::time::Instant::now();
        let completed_urls = Arc::new(AtomicUsize::new(0));
        let failed_urls = Arc::new(AtomicUsize::new(0));
        let total_urls_attempted = Arc::new(AtomicUsize::new(0));

        let cancel = CancellationToken::new();
        let cancel_logging = cancel.child_token();
        let completed_for_logging = Arc::clone(&completed_urls);
        let failed_for_logging = Arc::clone(&failed_urls);
        let logging_task = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL_SECS));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(start_time, &completed_for_logging, &failed_for_logging);
                    }
                    _ = cancel_logging.cancelled() => {
                        break;
                    }
                }
            }
        });

        let mut tasks = FuturesUnordered::new();

        loop {
            let line_result = if is_stdin {
                stdin_lines
                    .as_mut()
                    .expect("stdin_lines should be Some when is_stdin is true")
                    .next_line()
                    .await
            } else {
                file_lines
                    .as_mut()
                    .expect("file_lines should be Some when is_stdin is false")
                    .next_line()
                    .await
            };
            let line = match line_result {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read line from input: {e}");
                    continue;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some(url) = validate_and_normalize_input(trimmed) else {
                continue;
            };

            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping URL: {url}");
                    continue;
                }
            };

            total_urls_attempted.fetch_add(1, Ordering::SeqCst);

            let ctx = Arc::clone(&shared_ctx);
            let completed_clone = Arc::clone(&completed_urls);
            let failed_clone = Arc::clone(&failed_urls);

            tasks.push(tokio::spawn(async move {
                let _permit = permit;

                let result =
                    tokio::time::timeout(URL_PROCESSING_TIMEOUT, process_url(&url, &ctx)).await;

                match result {
                    Ok(Ok(report)) => {
                        completed_clone.fetch_add(1, Ordering::SeqCst);
                        Some(report)
                    }
                    Ok(Err(e)) => {
                        failed_clone.fetch_add(1, Ordering::SeqCst);
                        warn!("Failed to process URL {url}: {e}");
                        None
                    }
                    Err(_) => {
                        failed_clone.fetch_add(1, Ordering::SeqCst);
                        warn!(
                            "Timeout processing URL {url} after {} seconds",
                            URL_PROCESSING_TIMEOUT.as_secs()
                        );
                        ctx.error_stats.increment(ErrorType::ProcessUrlTimeout);
                        None
                    }
                }
            }));
        }

        let mut reports: Vec<ContainerReport> = Vec::new();
        while let Some(task_result) = tasks.next().await {
            match task_result {
                Ok(Some(report)) => reports.push(report),
                Ok(None) => {}
                Err(join_error) => {
                    failed_urls.fetch_add(1, Ordering::SeqCst);
                    warn!("Task panicked: {join_error:?}");
                }
            }
        }

        cancel.cancel();
        let _ = logging_task.await;

        log_progress(start_time, &completed_urls, &failed_urls);
        print_error_statistics(&error_stats);

        // Deterministic output order regardless of completion order
        reports.sort_by(|a, b| a.url.cmp(&b.url));
        let exported = export_jsonl(&reports, config.output.as_deref())
            .context("Failed to export reports")?;
        if let Some(output) = config.output.as_ref() {
            info!("Wrote {exported} reports to {}", output.display());
        }

        Ok(ScanReport {
            total_urls: total_urls_attempted.load(Ordering::SeqCst),
            successful: completed_urls.load(Ordering::SeqCst),
            failed: failed_urls.load(Ordering::SeqCst),
            output: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
