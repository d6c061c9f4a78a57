//! Container script fetching and size measurement.

use std::time::Instant;

use anyhow::{Context, Result};
use log::debug;
use tokio_retry::Retry;

use crate::config::{MAX_GTM_SIZE_BYTES, RETRY_MAX_ATTEMPTS};
use crate::error_handling::{get_retry_strategy, update_error_stats, ErrorStats};

/// A fetched container script plus its size measurements.
#[derive(Debug, Clone)]
pub struct FetchedContainer {
    /// Decoded response body.
    pub body: String,
    /// Bytes on the wire per Content-Length, or the decoded length when the
    /// header was absent.
    pub transferred_bytes: u64,
    /// Decoded body length in bytes.
    pub uncompressed_bytes: u64,
    /// True when `transferred_bytes` falls back to the decoded length.
    pub size_estimate: bool,
    /// Total wall-clock fetch duration in seconds, including failed
    /// attempts and backoff delays.
    pub fetch_time_seconds: f64,
}

/// Fetches a container script with retries.
///
/// Size against the 200KB publish limit is what GTM enforces on the wire, so
/// the Content-Length header is the measurement of record. Transparent gzip
/// decompression strips that header, in which case the decoded body length is
/// reported with `size_estimate` set.
pub async fn fetch_container(
    client: &reqwest::Client,
    url: &str,
    error_stats: &ErrorStats,
) -> Result<FetchedContainer> {
    let retry_strategy = get_retry_strategy().take(RETRY_MAX_ATTEMPTS - 1);
    let start = Instant::now();

    let result = Retry::spawn(retry_strategy, || async {
        let response = client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .header(reqwest::header::PRAGMA, "no-cache")
            .send()
            .await?
            .error_for_status()?;
        let content_length = response.content_length();
        let body = response.text().await?;
        Ok::<_, reqwest::Error>((content_length, body))
    })
    .await;

    let (content_length, body) = match result {
        Ok(fetched) => fetched,
        Err(e) => {
            update_error_stats(error_stats, &e);
            return Err(e).with_context(|| format!("Failed to fetch container from {url}"));
        }
    };

    let fetch_time_seconds = start.elapsed().as_secs_f64();
    let uncompressed_bytes = body.len() as u64;
    let (transferred_bytes, size_estimate) = match content_length {
        Some(n) => (n, false),
        None => (uncompressed_bytes, true),
    };

    debug!(
        "Fetched {url}: {transferred_bytes} bytes transferred ({uncompressed_bytes} decoded) in {fetch_time_seconds:.2}s"
    );

    Ok(FetchedContainer {
        body,
        transferred_bytes,
        uncompressed_bytes,
        size_estimate,
        fetch_time_seconds,
    })
}

/// Transferred size as a rounded percentage of the 200KB limit.
pub fn size_percent(bytes: u64) -> u32 {
    ((bytes as f64 / MAX_GTM_SIZE_BYTES as f64) * 100.0).round() as u32
}

/// Bytes to rounded kilobytes.
pub fn bytes_to_kb(bytes: u64) -> u64 {
    (bytes as f64 / 1024.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_percent_rounds() {
        assert_eq!(size_percent(0), 0);
        assert_eq!(size_percent(MAX_GTM_SIZE_BYTES), 100);
        assert_eq!(size_percent(MAX_GTM_SIZE_BYTES / 2), 50);
        // 102,912 / 204,800 = 50.25% -> 50
        assert_eq!(size_percent(102_912), 50);
        // 143,360 / 204,800 = 70% exactly
        assert_eq!(size_percent(143_360), 70);
    }

    #[test]
    fn test_size_percent_can_exceed_100() {
        assert_eq!(size_percent(MAX_GTM_SIZE_BYTES * 2), 200);
    }

    #[test]
    fn test_bytes_to_kb_rounds() {
        assert_eq!(bytes_to_kb(0), 0);
        assert_eq!(bytes_to_kb(1024), 1);
        assert_eq!(bytes_to_kb(1536), 2);
        assert_eq!(bytes_to_kb(1535), 1);
        assert_eq!(bytes_to_kb(204_800), 200);
    }
}
