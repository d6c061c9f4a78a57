//! Payload extraction from GTM container scripts.
//!
//! A published container script embeds its configuration as a JavaScript
//! statement (`var data = {...};`) inside a much larger non-JSON script body.
//! The object is located with an anchor search and a manual brace scan rather
//! than a regex: tag parameters routinely contain string-embedded braces
//! (inline HTML, regex source), which break any greedy or lazy `{...}` match.
//!
//! The upstream format is reverse-engineered, not a public contract, so every
//! failure mode here is equal: the extractor returns `None` and the caller
//! falls back to an empty analysis. This module is the only place that knows
//! how the resource is obtained; the classifier stays decoupled from it.

use log::debug;
use serde_json::Value;

use crate::analyze::ContainerResource;

/// Anchor preceding the embedded configuration object.
const DATA_ANCHOR: &str = "var data = ";

/// Extracts and parses the container resource from a raw script body.
///
/// Returns `None` when the anchor is missing, the braces never balance, or
/// the balanced region is not a JSON object. Historically the payload has
/// been published both as `{"resource": {...}}` and as the bare resource
/// object; both shapes are accepted.
pub fn extract(script_text: &str) -> Option<ContainerResource> {
    let data = extract_payload(script_text)?;
    let resource = match data.get("resource") {
        Some(inner) if inner.is_object() => inner,
        _ => &data,
    };
    Some(ContainerResource::from_value(resource))
}

/// Locates the embedded `var data = {...}` object and parses it as JSON.
pub fn extract_payload(script_text: &str) -> Option<Value> {
    let anchor = match script_text.find(DATA_ANCHOR) {
        Some(pos) => pos,
        None => {
            debug!("data anchor not found in script ({} bytes)", script_text.len());
            return None;
        }
    };
    let start = anchor + script_text[anchor..].find('{')?;
    let end = find_json_end(script_text.as_bytes(), start)?;

    match serde_json::from_str::<Value>(&script_text[start..end]) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => {
            debug!("extracted payload is not a JSON object");
            None
        }
        Err(err) => {
            debug!("extracted payload failed to parse: {err}");
            None
        }
    }
}

/// Scans forward from the opening brace and returns the end of the balanced
/// object (index one past the closing `}`).
///
/// Braces are counted only outside double-quoted strings, and a character
/// following a backslash never toggles the string flag. All delimiters are
/// ASCII, so scanning bytes is safe and the returned index is always a char
/// boundary.
fn find_json_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, &byte) in bytes.iter().enumerate().skip(start) {
        if escape_next {
            escape_next = false;
            continue;
        }
        match byte {
            b'\\' => escape_next = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrap(payload: &str) -> String {
        format!(
            "// Copyright 2012 Google Inc. All rights reserved.\n\
             (function(w,g){{w[g]=w[g]||[];}})(window,'dataLayer');\n\
             var data = {payload};\n\
             /*jslint evil: true*/ (function(){{var f = \"{{not data}}\";}})();\n"
        )
    }

    #[test]
    fn test_extract_simple_object() {
        let script = wrap(r#"{"resource":{"version":"12","tags":[{"function":"__html"}]}}"#);
        let resource = extract(&script).unwrap();
        assert_eq!(resource.version.as_deref(), Some("12"));
        assert_eq!(resource.tags.len(), 1);
    }

    #[test]
    fn test_extract_bare_resource_shape() {
        // Older containers publish the resource without the wrapper object.
        let script = wrap(r#"{"version":"7","macros":[{"function":"__k","name":"c"}]}"#);
        let resource = extract(&script).unwrap();
        assert_eq!(resource.version.as_deref(), Some("7"));
        assert_eq!(resource.macros.len(), 1);
    }

    #[test]
    fn test_braces_inside_strings_do_not_confuse_scan() {
        let script = wrap(
            r#"{"tags":[{"function":"__html","name":"A { B } C \"quoted\"","vtp_html":"<div onclick=\"f({a:1})\">{{x}}</div>"}]}"#,
        );
        let resource = extract(&script).unwrap();
        assert_eq!(
            resource.tags[0].name.as_deref(),
            Some(r#"A { B } C "quoted""#)
        );
    }

    #[test]
    fn test_escaped_backslash_before_quote() {
        // The value ends with an escaped backslash; the closing quote after it
        // must still terminate the string.
        let script = wrap(r#"{"tags":[{"function":"__html","name":"ends with \\"}]}"#);
        let resource = extract(&script).unwrap();
        assert_eq!(resource.tags[0].name.as_deref(), Some("ends with \\"));
    }

    #[test]
    fn test_missing_anchor_returns_none() {
        let script = r#"(function(){var config = {"tags":[]};})();"#;
        assert!(extract(script).is_none());
    }

    #[test]
    fn test_no_opening_brace_returns_none() {
        assert!(extract("var data = ").is_none());
        assert!(extract("var data = null;").is_none());
    }

    #[test]
    fn test_unbalanced_braces_return_none() {
        assert!(extract(r#"var data = {"tags":[{"function":"__html"}]"#).is_none());
    }

    #[test]
    fn test_balanced_but_invalid_json_returns_none() {
        // Trailing comma: brace scan succeeds, JSON parse must reject it.
        assert!(extract(r#"var data = {"tags":[],}"#).is_none());
    }

    #[test]
    fn test_non_object_resource_field_falls_back_to_top_level() {
        let script = wrap(r#"{"resource":"nope","tags":[{"function":"__fbq"}]}"#);
        let resource = extract(&script).unwrap();
        assert_eq!(resource.tags.len(), 1);
    }

    #[test]
    fn test_payload_round_trips_exactly() {
        let payload = json!({
            "resource": {
                "version": "9",
                "tags": [{"function": "__html", "name": "A { B } C \"quoted\""}],
                "predicates": [{"function": "_re", "arg1": "gtm\\.js|gtm\\.dom"}],
                "rules": [[["if", 0], ["add", 0]]]
            }
        });
        let script = wrap(&payload.to_string());
        assert_eq!(extract_payload(&script).unwrap(), payload);
    }

    #[test]
    fn test_multibyte_content_in_strings() {
        let script = wrap(r#"{"tags":[{"function":"__html","name":"ação — 測定 {ok}"}]}"#);
        let resource = extract(&script).unwrap();
        assert_eq!(resource.tags[0].name.as_deref(), Some("ação — 測定 {ok}"));
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    fn arbitrary_payload() -> impl Strategy<Value = Value> {
        // String values exercising quotes, backslashes, and braces inside
        // string literals; keys kept simple.
        let value = "[ -~]{0,40}".prop_map(Value::String);
        proptest::collection::btree_map("[a-z]{1,8}", value, 0..6)
            .prop_map(|map| json!({ "resource": { "tags": [], "extra": map } }))
    }

    proptest! {
        #[test]
        fn test_extract_payload_inverts_serialization(payload in arbitrary_payload()) {
            let script = wrap(&payload.to_string());
            prop_assert_eq!(extract_payload(&script), Some(payload));
        }

        #[test]
        fn test_extract_never_panics(script in "[ -~\\n]{0,200}") {
            let _ = extract(&script);
        }

        #[test]
        fn test_extract_resource_is_deterministic(payload in arbitrary_payload()) {
            let script = wrap(&payload.to_string());
            prop_assert_eq!(extract(&script), extract(&script));
        }
    }
}
