//! Error taxonomy, statistics, and retry strategy.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;
use tokio_retry::strategy::ExponentialBackoff;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    Logger(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] ReqwestError),
}

/// Categories of failures in the container processing pipeline.
///
/// Used for counting and end-of-run reporting; the HTTP variants mirror the
/// distinctions `reqwest::Error` exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    // Pipeline errors
    NotAGtmUrl,
    InvalidContainerId,
    PayloadExtractError,
    ProcessUrlTimeout,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::NotAGtmUrl => "Not a GTM container URL",
            ErrorType::InvalidContainerId => "Invalid container id",
            ErrorType::PayloadExtractError => "Payload extract error",
            ErrorType::ProcessUrlTimeout => "Process URL timeout",
        }
    }
}

/// Thread-safe error statistics tracker.
///
/// Tracks the count of each error type using atomic counters so it can be
/// shared across tasks behind an `Arc`. All error types are initialized to
/// zero on creation.
pub struct ErrorStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ErrorStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ErrorStats { errors }
    }

    pub fn increment(&self, error: ErrorType) {
        // All ErrorType variants are initialized in new(), so unwrap() is safe
        self.errors
            .get(&error)
            .unwrap()
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).unwrap().load(Ordering::SeqCst)
    }

    /// Total errors across all categories.
    pub fn total(&self) -> usize {
        ErrorType::iter().map(|e| self.get_count(e)).sum()
    }
}

impl Default for ErrorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an exponential backoff retry strategy for container fetches.
pub fn get_retry_strategy() -> ExponentialBackoff {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
}

/// Updates error statistics based on a `reqwest::Error`.
///
/// Handles both HTTP status errors (e.g. 429 Too Many Requests) and
/// network-level errors (timeouts, connection failures, decode failures).
pub fn update_error_stats(error_stats: &ErrorStats, error: &reqwest::Error) {
    let error_type = match error.status() {
        Some(status) if status.is_client_error() => match status.as_u16() {
            429 => ErrorType::HttpRequestTooManyRequests,
            _ => ErrorType::HttpRequestOtherError,
        },
        Some(status) if status.is_server_error() => ErrorType::HttpRequestOtherError,
        _ => {
            if error.is_builder() {
                ErrorType::HttpRequestBuilderError
            } else if error.is_redirect() {
                ErrorType::HttpRequestRedirectError
            } else if error.is_status() {
                ErrorType::HttpRequestStatusError
            } else if error.is_timeout() {
                ErrorType::HttpRequestTimeoutError
            } else if error.is_request() {
                ErrorType::HttpRequestRequestError
            } else if error.is_connect() {
                ErrorType::HttpRequestConnectError
            } else if error.is_body() {
                ErrorType::HttpRequestBodyError
            } else if error.is_decode() {
                ErrorType::HttpRequestDecodeError
            } else {
                ErrorType::HttpRequestOtherError
            }
        }
    };

    error_stats.increment(error_type);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_stats_initialization() {
        let stats = ErrorStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_count(error_type), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_error_stats_increment() {
        let stats = ErrorStats::new();
        stats.increment(ErrorType::PayloadExtractError);
        assert_eq!(stats.get_count(ErrorType::PayloadExtractError), 1);
        assert_eq!(stats.get_count(ErrorType::InvalidContainerId), 0);
        assert_eq!(stats.total(), 1);
    }

    #[test]
    fn test_error_stats_multiple_increments() {
        let stats = ErrorStats::new();
        stats.increment(ErrorType::NotAGtmUrl);
        stats.increment(ErrorType::NotAGtmUrl);
        stats.increment(ErrorType::ProcessUrlTimeout);
        assert_eq!(stats.get_count(ErrorType::NotAGtmUrl), 2);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_retry_strategy_backs_off() {
        let delays: Vec<_> = get_retry_strategy().take(3).collect();
        assert_eq!(delays.len(), 3);
        assert!(delays[0] <= delays[1]);
        assert!(delays[1] <= delays[2]);
    }
}
