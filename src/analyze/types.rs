//! Typed views of the container resource and the analysis output.
//!
//! The raw resource is third-party JSON with no schema guarantees, so every
//! field is optional and wrong-typed fields degrade to empty at this boundary
//! instead of failing deserialization. The analysis output is a plain value
//! that serializes to the camelCase shape the UI/cache layers expect.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// One entry from the container's `tags` or `macros` array.
///
/// Only the fields the classifier reads are retained; everything else in the
/// raw entry (parameter vectors, firing ids, etc.) is dropped here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceEntry {
    /// Internal function id, e.g. `__gaawe` or `cvt_12345_67`.
    pub function: Option<String>,
    /// User-assigned name, when the container publishes one.
    pub name: Option<String>,
    /// Alternate user-assigned label seen on some tag entries.
    pub tag_name: Option<String>,
}

impl ResourceEntry {
    fn from_value(value: &Value) -> Self {
        let get_str = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        ResourceEntry {
            function: get_str("function"),
            name: get_str("name"),
            tag_name: get_str("tagName"),
        }
    }
}

/// The parsed GTM container resource.
///
/// Built once from the extracted JSON value; a missing or wrong-typed field
/// becomes an empty sequence here, so the classifier never needs shape checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerResource {
    pub version: Option<String>,
    pub macros: Vec<ResourceEntry>,
    pub tags: Vec<ResourceEntry>,
    pub predicates: Vec<Value>,
    pub rules: Vec<Value>,
}

impl ContainerResource {
    /// Builds a typed resource from the raw JSON value.
    ///
    /// This is the single place where the default-to-empty rule is applied:
    /// each field is taken independently, so a malformed `tags` array does not
    /// discard an intact `macros` array.
    pub fn from_value(value: &Value) -> Self {
        let entries = |key: &str| -> Vec<ResourceEntry> {
            value
                .get(key)
                .and_then(Value::as_array)
                .map(|items| items.iter().map(ResourceEntry::from_value).collect())
                .unwrap_or_default()
        };
        let passthrough = |key: &str| -> Vec<Value> {
            value
                .get(key)
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default()
        };
        ContainerResource {
            version: value
                .get("version")
                .and_then(Value::as_str)
                .map(str::to_string),
            macros: entries("macros"),
            tags: entries("tags"),
            predicates: passthrough("predicates"),
            rules: passthrough("rules"),
        }
    }
}

/// Counts grouped by display name, plus the bucket total.
///
/// `by_name` is a `BTreeMap`, so keys iterate (and serialize) in ordinary
/// lexicographic order with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BucketSummary {
    #[serde(rename = "byName")]
    pub by_name: BTreeMap<String, u32>,
    pub total: u32,
}

/// Tag counts grouped by display name and rolled up by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagSummary {
    #[serde(rename = "byName")]
    pub by_name: BTreeMap<String, u32>,
    #[serde(rename = "byCategory")]
    pub by_category: BTreeMap<String, u32>,
    pub total: u32,
}

/// The normalized analysis of one container resource.
///
/// A pure value: classifying the same resource twice yields equal analyses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContainerAnalysis {
    pub version: Option<String>,
    pub tags: TagSummary,
    pub triggers: BucketSummary,
    pub macros: BucketSummary,
    pub predicates: Vec<Value>,
    pub rules: Vec<Value>,
}

impl ContainerAnalysis {
    /// All-zero analysis, used when extraction fails but a container was
    /// still detected.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_from_value_full() {
        let value = json!({
            "version": "723",
            "macros": [{"function": "__k", "name": "myCookie"}],
            "tags": [{"function": "__html", "tagName": "Banner"}],
            "predicates": [{"function": "_eq"}],
            "rules": [[["if", 0], ["add", 1]]]
        });
        let resource = ContainerResource::from_value(&value);
        assert_eq!(resource.version.as_deref(), Some("723"));
        assert_eq!(resource.macros.len(), 1);
        assert_eq!(resource.macros[0].function.as_deref(), Some("__k"));
        assert_eq!(resource.macros[0].name.as_deref(), Some("myCookie"));
        assert_eq!(resource.tags[0].tag_name.as_deref(), Some("Banner"));
        assert_eq!(resource.predicates.len(), 1);
        assert_eq!(resource.rules.len(), 1);
    }

    #[test]
    fn test_resource_from_value_missing_fields() {
        let resource = ContainerResource::from_value(&json!({}));
        assert!(resource.version.is_none());
        assert!(resource.macros.is_empty());
        assert!(resource.tags.is_empty());
        assert!(resource.predicates.is_empty());
        assert!(resource.rules.is_empty());
    }

    #[test]
    fn test_resource_from_value_wrong_types_degrade_per_field() {
        // A wrong-typed tags field must not discard the intact macros field.
        let value = json!({
            "version": 42,
            "tags": "not-an-array",
            "macros": [{"function": "__c", "name": "const"}]
        });
        let resource = ContainerResource::from_value(&value);
        assert!(resource.version.is_none());
        assert!(resource.tags.is_empty());
        assert_eq!(resource.macros.len(), 1);
    }

    #[test]
    fn test_resource_entry_ignores_non_string_fields() {
        let value = json!({"function": 7, "name": "ok"});
        let entry = ResourceEntry::from_value(&value);
        assert!(entry.function.is_none());
        assert_eq!(entry.name.as_deref(), Some("ok"));
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let mut analysis = ContainerAnalysis::empty();
        analysis.tags.by_name.insert("Custom HTML".to_string(), 2);
        analysis.tags.total = 2;
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["tags"]["byName"]["Custom HTML"], 2);
        assert!(json["tags"]["byCategory"].is_object());
        assert_eq!(json["triggers"]["total"], 0);
    }
}
