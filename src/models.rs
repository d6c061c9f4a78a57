//! Report types produced by the scan pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyze::ContainerAnalysis;
use crate::config::{SIZE_CRITICAL_PERCENT, SIZE_WARN_PERCENT};

/// Severity of a container's size relative to the 200 KB serving limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeSeverity {
    /// Below the warning threshold.
    Ok,
    /// At or above 50% of the limit.
    Warning,
    /// At or above 70% of the limit.
    Critical,
}

impl SizeSeverity {
    pub fn from_percent(percent: u32) -> Self {
        if percent >= SIZE_CRITICAL_PERCENT {
            SizeSeverity::Critical
        } else if percent >= SIZE_WARN_PERCENT {
            SizeSeverity::Warning
        } else {
            SizeSeverity::Ok
        }
    }
}

/// Everything learned about one container URL: identity, size, and the
/// classified contents of its data payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerReport {
    /// The URL that was fetched (after normalization).
    pub url: String,
    /// Container id from the `id` query parameter, when present and valid.
    pub container_id: Option<String>,
    /// Whether the URL looks like a server-side/proxied GTM endpoint.
    pub is_proxy: bool,
    /// Transferred size in KB (rounded).
    pub size_kb: u64,
    /// Decoded body size in KB (rounded).
    pub uncompressed_size_kb: u64,
    /// True when no Content-Length header was available and the decoded
    /// body length stands in for the transferred size.
    pub size_estimate: bool,
    /// Transferred size as a percentage of the 200 KB limit (rounded).
    pub percent_of_limit: u32,
    pub severity: SizeSeverity,
    /// Wall-clock fetch duration in seconds, retries included.
    pub fetch_time_seconds: f64,
    /// False when no data payload could be extracted from the body; the
    /// analysis below is then empty rather than absent.
    pub analyzed: bool,
    pub analysis: ContainerAnalysis,
    pub observed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(SizeSeverity::from_percent(0), SizeSeverity::Ok);
        assert_eq!(SizeSeverity::from_percent(49), SizeSeverity::Ok);
        assert_eq!(SizeSeverity::from_percent(50), SizeSeverity::Warning);
        assert_eq!(SizeSeverity::from_percent(69), SizeSeverity::Warning);
        assert_eq!(SizeSeverity::from_percent(70), SizeSeverity::Critical);
        assert_eq!(SizeSeverity::from_percent(130), SizeSeverity::Critical);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = ContainerReport {
            url: "https://www.googletagmanager.com/gtm.js?id=GTM-ABC1234".to_string(),
            container_id: Some("GTM-ABC1234".to_string()),
            is_proxy: false,
            size_kb: 120,
            uncompressed_size_kb: 480,
            size_estimate: false,
            percent_of_limit: 60,
            severity: SizeSeverity::Warning,
            fetch_time_seconds: 0.25,
            analyzed: true,
            analysis: ContainerAnalysis::empty(),
            observed_at: Utc::now(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["containerId"], "GTM-ABC1234");
        assert_eq!(json["sizeKb"], 120);
        assert_eq!(json["percentOfLimit"], 60);
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["analyzed"], true);
        assert!(json["analysis"]["tags"]["byName"].is_object());
    }
}
