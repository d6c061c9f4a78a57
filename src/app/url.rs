//! Scan input validation and normalization.

use log::warn;

use crate::config::CANONICAL_GTM_URL_PREFIX;
use crate::detect::is_valid_container_id;

/// Maximum URL length (2048 characters); matches common browser and server
/// limits.
const MAX_URL_LENGTH: usize = 2048;

/// Validates and normalizes one scan input line.
///
/// A bare container id like `GTM-ABC1234` expands to the canonical
/// googletagmanager.com URL for that container. Anything else is treated as a
/// URL: an https:// prefix is added if missing, then syntax and scheme are
/// checked. Logs a warning and returns None if the input is invalid, too
/// long, or uses an unsupported scheme.
pub fn validate_and_normalize_input(input: &str) -> Option<String> {
    let input = input.trim();

    if is_valid_container_id(input) {
        return Some(format!("{CANONICAL_GTM_URL_PREFIX}{input}"));
    }

    if input.len() > MAX_URL_LENGTH {
        // char-based truncation: byte 50 may not be a char boundary
        let preview: String = input.chars().take(50).collect();
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {preview}...",
            input.len(),
            MAX_URL_LENGTH,
        );
        return None;
    }

    let normalized = if !input.starts_with("http://") && !input.starts_with("https://") {
        format!("https://{input}")
    } else {
        input.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        let preview: String = normalized.chars().take(50).collect();
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {}): {preview}...",
            normalized.len(),
            MAX_URL_LENGTH,
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => {
                warn!("Skipping unsupported scheme for URL: {input}");
                None
            }
        },
        Err(_) => {
            warn!("Skipping invalid URL: {input}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_input;

    #[test]
    fn test_bare_container_id_expands_to_canonical_url() {
        let result = validate_and_normalize_input("GTM-ABC1234");
        assert_eq!(
            result,
            Some("https://www.googletagmanager.com/gtm.js?id=GTM-ABC1234".to_string())
        );
    }

    #[test]
    fn test_bare_container_id_trims_whitespace() {
        let result = validate_and_normalize_input("  GTM-ABC1234\t");
        assert_eq!(
            result,
            Some("https://www.googletagmanager.com/gtm.js?id=GTM-ABC1234".to_string())
        );
    }

    #[test]
    fn test_lowercase_id_is_not_a_container_id() {
        // gtm-abc1234 fails the id format, so it goes down the URL path
        let result = validate_and_normalize_input("gtm-abc1234");
        assert_eq!(result, Some("https://gtm-abc1234".to_string()));
    }

    #[test]
    fn test_adds_https_prefix() {
        let result = validate_and_normalize_input("tagging.example.com/gtm.js?id=GTM-ABC1234");
        assert_eq!(
            result,
            Some("https://tagging.example.com/gtm.js?id=GTM-ABC1234".to_string())
        );
    }

    #[test]
    fn test_preserves_http() {
        let result = validate_and_normalize_input("http://example.com/gtm.js");
        assert_eq!(result, Some("http://example.com/gtm.js".to_string()));
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert_eq!(validate_and_normalize_input("not a url at all!!!"), None);
        assert_eq!(validate_and_normalize_input(""), None);
    }

    #[test]
    fn test_rejects_too_long_url() {
        let long_url = format!("https://example.com/{}", "a".repeat(2100));
        assert_eq!(validate_and_normalize_input(&long_url), None);
    }

    #[test]
    fn test_rejects_url_over_limit_after_normalization() {
        let url = format!("example.com/{}", "a".repeat(2045));
        assert_eq!(validate_and_normalize_input(&url), None);
    }

    // The over-length warnings truncate the input for display; that
    // truncation must be char-based, since byte 50 of a multibyte input is
    // not necessarily a char boundary. A logger must be live or warn! never
    // formats its arguments.
    fn init_test_logger() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Warn)
            .is_test(true)
            .try_init();
    }

    #[test]
    fn test_overlong_multibyte_input_rejected_without_panic() {
        init_test_logger();
        // 2100 bytes of 3-byte chars; byte 50 falls mid-char
        let input = "€".repeat(700);
        assert_eq!(validate_and_normalize_input(&input), None);
    }

    #[test]
    fn test_multibyte_input_over_limit_after_normalization_rejected() {
        init_test_logger();
        // 2044 bytes before the https:// prefix, 2052 after; the leading
        // "a" keeps byte 50 of the normalized string off a char boundary
        let input = format!("a{}x", "€".repeat(681));
        assert!(input.len() <= 2048);
        assert!(input.len() + 8 > 2048);
        assert_eq!(validate_and_normalize_input(&input), None);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_normalization_idempotent(url in "[a-z]{3,20}\\.[a-z]{2,5}") {
            let normalized1 = validate_and_normalize_input(&url);
            if let Some(n1) = normalized1 {
                let normalized2 = validate_and_normalize_input(&n1);
                prop_assert_eq!(Some(n1.clone()), normalized2,
                    "Normalizing twice should produce same result");
            }
        }

        #[test]
        fn test_container_ids_expand(suffix in "[A-Z0-9]{7,10}") {
            let id = format!("GTM-{suffix}");
            let result = validate_and_normalize_input(&id);
            prop_assert_eq!(
                result,
                Some(format!("https://www.googletagmanager.com/gtm.js?id={id}"))
            );
        }

        #[test]
        fn test_scheme_handling(domain in "[a-z]{3,20}\\.[a-z]{2,5}") {
            let no_scheme = validate_and_normalize_input(&domain);
            prop_assert!(no_scheme.is_some());
            prop_assert!(no_scheme.unwrap().starts_with("https://"));

            let http_url = format!("http://{}", domain);
            let with_http = validate_and_normalize_input(&http_url);
            prop_assert!(with_http.is_some());
            prop_assert!(with_http.unwrap().starts_with("http://"));
        }

        #[test]
        fn test_special_chars_no_panic(
            domain in "[a-z]{3,20}\\.[a-z]{2,5}",
            path in "[^/]{0,100}"
        ) {
            let url = format!("https://{}/{}", domain, path);
            // Should not panic on any input
            let _result = validate_and_normalize_input(&url);
        }

        #[test]
        fn test_length_validation(
            domain in "[a-z]{3,20}\\.[a-z]{2,5}",
            path in prop::collection::vec("[a-z]{1,10}", 0..200)
        ) {
            let url = format!("https://{}/{}", domain, path.join("/"));
            let result = validate_and_normalize_input(&url);

            if url.len() <= 2048 {
                prop_assert!(result.is_some(),
                    "Valid URL under limit should normalize successfully");
            } else {
                prop_assert!(result.is_none(),
                    "URL over 2048 chars should be rejected");
            }
        }
    }
}
