//! Per-URL processing pipeline.

use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::Utc;
use log::{debug, warn};

use crate::analyze::{classify, ContainerAnalysis};
use crate::cache::AnalysisCache;
use crate::detect::{extract_container_id, is_gtm_url, is_proxy, is_valid_container_id};
use crate::error_handling::{ErrorStats, ErrorType};
use crate::extract::extract;
use crate::fetch::{bytes_to_kb, fetch_container, size_percent};
use crate::models::{ContainerReport, SizeSeverity};

/// Shared state handed to every per-URL task.
pub struct ProcessingContext {
    pub client: Arc<reqwest::Client>,
    pub cache: Arc<AnalysisCache>,
    pub error_stats: Arc<ErrorStats>,
}

/// Runs the full pipeline for one container URL: detection, cache lookup,
/// fetch, payload extraction, and classification.
///
/// Extraction failure is not fatal: the report carries `analyzed: false` and
/// an empty analysis, since the size measurements are still useful on their
/// own.
pub async fn process_url(url: &str, ctx: &ProcessingContext) -> Result<ContainerReport> {
    if !is_gtm_url(url) {
        ctx.error_stats.increment(ErrorType::NotAGtmUrl);
        bail!("Not a GTM container URL: {url}");
    }

    if let Some(cached) = ctx.cache.get(url) {
        debug!("Cache hit for {url}");
        return Ok(cached);
    }

    let container_id = match extract_container_id(url) {
        Some(id) if is_valid_container_id(&id) => Some(id),
        Some(id) => {
            ctx.error_stats.increment(ErrorType::InvalidContainerId);
            warn!("Malformed container id {id:?} in {url}; reporting without it");
            None
        }
        None => None,
    };

    let fetched = fetch_container(&ctx.client, url, &ctx.error_stats).await?;

    let (analysis, analyzed) = match extract(&fetched.body) {
        Some(resource) => (classify(&resource), true),
        None => {
            ctx.error_stats.increment(ErrorType::PayloadExtractError);
            warn!("No data payload found in {url}; reporting size only");
            (ContainerAnalysis::empty(), false)
        }
    };

    let percent = size_percent(fetched.transferred_bytes);
    let report = ContainerReport {
        url: url.to_string(),
        container_id,
        is_proxy: is_proxy(url),
        size_kb: bytes_to_kb(fetched.transferred_bytes),
        uncompressed_size_kb: bytes_to_kb(fetched.uncompressed_bytes),
        size_estimate: fetched.size_estimate,
        percent_of_limit: percent,
        severity: SizeSeverity::from_percent(percent),
        fetch_time_seconds: fetched.fetch_time_seconds,
        analyzed,
        analysis,
        observed_at: Utc::now(),
    };

    ctx.cache.insert(url, report.clone());
    Ok(report)
}
