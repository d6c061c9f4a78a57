//! GTM container URL detection.
//!
//! Recognizes URLs that serve a GTM container script, including first-party
//! proxied copies, and extracts the container id from the query string.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Official googletagmanager.com container script URL.
static OFFICIAL_GOOGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://www\.googletagmanager\.com/gtm\.js").expect("valid regex")
});

/// Generic pattern catching GTM served from any domain.
static GENERIC_GTM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/gtm\.js\?id=GTM-[A-Z0-9]+").expect("valid regex"));

/// Broader variant tolerating dashes in the container id.
static BROAD_GTM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gtm\.js\?id=GTM-[A-Z0-9-]+").expect("valid regex"));

/// Container ids are `GTM-` followed by at least 7 uppercase alphanumerics.
static CONTAINER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^GTM-[A-Z0-9]{7,}$").expect("valid regex"));

/// Path fragments that identify proxied GTM endpoints.
const PROXY_INDICATORS: &[&str] = &["/gtm.js", "/gtag/js", "/gtm."];

/// True when the URL looks like it serves a GTM container script.
///
/// Accepts the official Google host, any domain serving `gtm.js?id=GTM-...`,
/// and googletagmanager.com URLs matching a proxy indicator path.
pub fn is_gtm_url(url: &str) -> bool {
    if OFFICIAL_GOOGLE.is_match(url) || GENERIC_GTM.is_match(url) || BROAD_GTM.is_match(url) {
        return true;
    }
    match Url::parse(url) {
        Ok(parsed) => {
            parsed
                .host_str()
                .is_some_and(|host| host.contains("googletagmanager.com"))
                && PROXY_INDICATORS.iter().any(|hint| url.contains(hint))
        }
        Err(_) => false,
    }
}

/// True when the container is served from somewhere other than Google's own
/// host (a first-party proxy or server-side tagging endpoint).
pub fn is_proxy(url: &str) -> bool {
    !url.contains("googletagmanager.com")
}

/// Extracts the container id from the URL's `id` query parameter.
pub fn extract_container_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
}

/// Validates the `GTM-XXXXXXX` container id format.
pub fn is_valid_container_id(container_id: &str) -> bool {
    CONTAINER_ID.is_match(container_id)
}
