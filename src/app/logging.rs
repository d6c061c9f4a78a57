//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Logs progress information about container processing.
pub fn log_progress(
    start_time: std::time::Instant,
    completed_urls: &Arc<AtomicUsize>,
    failed_urls: &Arc<AtomicUsize>,
) {
    let elapsed = start_time.elapsed();
    let completed = completed_urls.load(Ordering::SeqCst);
    let failed = failed_urls.load(Ordering::SeqCst);
    let elapsed_secs = elapsed.as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} containers ({} failed) in {:.2} seconds (~{:.2}/sec)",
        completed, failed, elapsed_secs, rate
    );
}

/// Logs a summary of error counts by category, skipping zero counts.
pub fn print_error_statistics(error_stats: &crate::error_handling::ErrorStats) {
    use strum::IntoEnumIterator;

    if error_stats.total() == 0 {
        return;
    }
    info!("Error summary:");
    for error_type in crate::error_handling::ErrorType::iter() {
        let count = error_stats.get_count(error_type);
        if count > 0 {
            info!("  {}: {}", error_type.as_str(), count);
        }
    }
}
