//! Tests for CLI argument parsing.

use clap::Parser;
use gtm_status::{Config, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["gtm_status"]).expect("Should parse with no args");
    assert_eq!(config.file, PathBuf::from("urls.txt"));
    assert_eq!(config.max_concurrency, 10);
    assert!(config.output.is_none());
    // LogLevel doesn't implement PartialEq, so compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Info
    );
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_positional_file() {
    let config =
        Config::try_parse_from(["gtm_status", "containers.txt"]).expect("Should parse file arg");
    assert_eq!(config.file, PathBuf::from("containers.txt"));
}

#[test]
fn test_stdin_marker() {
    let config = Config::try_parse_from(["gtm_status", "-"]).expect("Should parse stdin marker");
    assert_eq!(config.file, PathBuf::from("-"));
}

#[test]
fn test_long_flags() {
    let config = Config::try_parse_from([
        "gtm_status",
        "urls.txt",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--output",
        "reports.jsonl",
        "--max-concurrency",
        "25",
        "--timeout-seconds",
        "5",
        "--user-agent",
        "test-agent/1.0",
    ])
    .expect("Should parse all flags");

    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.output, Some(PathBuf::from("reports.jsonl")));
    assert_eq!(config.max_concurrency, 25);
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Config::try_parse_from(["gtm_status", "--log-level", "verbose"]);
    assert!(result.is_err(), "Unknown log level should be rejected");
}

#[test]
fn test_invalid_log_format_rejected() {
    let result = Config::try_parse_from(["gtm_status", "--log-format", "xml"]);
    assert!(result.is_err(), "Unknown log format should be rejected");
}

#[test]
fn test_all_log_levels_parse() {
    for level in ["error", "warn", "info", "debug", "trace"] {
        let config = Config::try_parse_from(["gtm_status", "--log-level", level])
            .unwrap_or_else(|e| panic!("Level {level} should parse: {e}"));
        let _filter: log::LevelFilter = config.log_level.into();
    }
}

#[test]
fn test_log_level_conversions() {
    assert_eq!(
        log::LevelFilter::from(LogLevel::Error),
        log::LevelFilter::Error
    );
    assert_eq!(
        log::LevelFilter::from(LogLevel::Warn),
        log::LevelFilter::Warn
    );
    assert_eq!(
        log::LevelFilter::from(LogLevel::Trace),
        log::LevelFilter::Trace
    );
}
