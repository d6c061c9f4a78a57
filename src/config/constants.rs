//! Configuration constants.
//!
//! Defaults for timeouts, limits, caching, and retry behavior.

use std::time::Duration;

/// GTM's documented soft limit on container size: 200KB.
/// Containers above this cannot be published; the percentage reported for a
/// container is measured against this ceiling.
pub const MAX_GTM_SIZE_BYTES: u64 = 200 * 1024;

/// Badge-style severity thresholds, as percent of the 200KB limit.
pub const SIZE_WARN_PERCENT: u32 = 50;
pub const SIZE_CRITICAL_PERCENT: u32 = 70;

/// Per-request timeout for fetching a container script.
/// Containers are small (<=200KB compressed) so 15s is generous.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Overall per-URL processing timeout (fetch + retries + analysis).
pub const URL_PROCESSING_TIMEOUT: Duration = Duration::from_secs(30);

/// Progress logging interval in seconds.
pub const LOGGING_INTERVAL_SECS: u64 = 5;

/// Analysis cache time-to-live. Published containers change rarely within a
/// session; 5 minutes matches how long a badge/report stays meaningful.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Maximum number of cached analyses before oldest-first eviction.
pub const MAX_CACHE_ENTRIES: usize = 50;

// Retry strategy
/// Initial delay in milliseconds before the first retry.
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which the retry delay is multiplied on each attempt.
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds.
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Maximum number of attempts (initial attempt + retries).
pub const RETRY_MAX_ATTEMPTS: usize = 3;

/// Default User-Agent for container fetches.
///
/// Some first-party GTM proxies vary responses on User-Agent, so a current
/// browser string gets the same bytes a visitor would. Override via the
/// `--user-agent` flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Canonical URL for a container given only its id.
pub const CANONICAL_GTM_URL_PREFIX: &str = "https://www.googletagmanager.com/gtm.js?id=";
