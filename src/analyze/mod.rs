//! Container classification.
//!
//! Turns a [`ContainerResource`] into a [`ContainerAnalysis`]: tags, trigger
//! listeners, and variables counted by display name, with a best-effort
//! category rollup for tags. Classification is a pure function of the
//! resource and the static catalogs; no error escapes `classify` — malformed
//! input degrades to empty buckets.

pub mod catalog;
pub mod types;

use std::collections::BTreeMap;

use catalog::{
    is_non_tag_id, is_trigger_id, macro_type_name, tag_by_id, tag_by_name, trigger_type_name,
    TagCategory,
};
pub use types::{BucketSummary, ContainerAnalysis, ContainerResource, ResourceEntry, TagSummary};

/// Strips the `__` prefix GTM puts on built-in function ids.
fn bare_id(function: &str) -> &str {
    function.strip_prefix("__").unwrap_or(function)
}

/// Catalog-derived friendly name and category for a bare function id.
///
/// Custom-template ids (`cvt_` prefix) get a fixed name; unknown ids fall
/// back to the id itself with a single leading underscore stripped.
fn friendly_tag_name(id: &str) -> (String, TagCategory) {
    if id.starts_with("cvt_") {
        return ("Custom Template".to_string(), TagCategory::Custom);
    }
    if let Some(tag) = tag_by_id(id) {
        return (tag.name.to_string(), tag.category);
    }
    let name = id.strip_prefix('_').unwrap_or(id);
    (name.to_string(), TagCategory::Other)
}

/// Classifies a container resource into a normalized analysis.
///
/// The `tags` array of a published container mixes real tags with trigger
/// listener registrations; each entry lands in exactly one bucket:
///
/// 1. bare id in the trigger set → counted as a trigger;
/// 2. otherwise `cvt_`-prefixed → counted as a tag (custom template);
/// 3. otherwise bare id in the non-tag ignore list → counted nowhere;
/// 4. otherwise → counted as a tag (unknown ids are accepted by default).
pub fn classify(resource: &ContainerResource) -> ContainerAnalysis {
    let mut tags_by_name: BTreeMap<String, u32> = BTreeMap::new();
    let mut triggers_by_name: BTreeMap<String, u32> = BTreeMap::new();
    let mut tags_total = 0u32;

    for entry in &resource.tags {
        let Some(function) = entry.function.as_deref() else {
            continue;
        };
        let id = bare_id(function);

        if is_trigger_id(id) {
            let name = trigger_type_name(id).unwrap_or(id);
            *triggers_by_name.entry(name.to_string()).or_insert(0) += 1;
            continue;
        }

        // Custom templates always count as tags, even if an id in the ignore
        // list ever collided with the cvt_ shape.
        if !id.starts_with("cvt_") && is_non_tag_id(id) {
            continue;
        }

        let (friendly, _) = friendly_tag_name(id);
        let display = entry
            .tag_name
            .clone()
            .or_else(|| entry.name.clone())
            .unwrap_or(friendly);
        *tags_by_name.entry(display).or_insert(0) += 1;
        tags_total += 1;
    }

    let mut macros_by_name: BTreeMap<String, u32> = BTreeMap::new();
    for entry in &resource.macros {
        let Some(function) = entry.function.as_deref() else {
            continue;
        };
        let id = bare_id(function);
        // An entry with neither a catalog mapping nor its own name cannot be
        // labeled and is dropped.
        let display = match (entry.name.clone(), macro_type_name(id)) {
            (Some(name), _) => name,
            (None, Some(catalog_name)) => catalog_name.to_string(),
            (None, None) => continue,
        };
        *macros_by_name.entry(display).or_insert(0) += 1;
    }

    let triggers_total = triggers_by_name.values().sum();
    let macros_total = macros_by_name.values().sum();
    let by_category = categorize_by_name(&tags_by_name);

    ContainerAnalysis {
        version: resource.version.clone(),
        tags: TagSummary {
            by_name: tags_by_name,
            by_category,
            total: tags_total,
        },
        triggers: BucketSummary {
            by_name: triggers_by_name,
            total: triggers_total,
        },
        macros: BucketSummary {
            by_name: macros_by_name,
            total: macros_total,
        },
        predicates: resource.predicates.clone(),
        rules: resource.rules.clone(),
    }
}

/// Rolls tag counts up by category, reverse-matching display names against
/// the catalog.
///
/// Best-effort by design: a user-renamed tag only matches the substring
/// overrides, and a custom label that happens to contain "Google" will land
/// in the Google bucket. The overrides apply in order, so a name containing
/// both "Google" and "Analytics" counts as Analytics.
fn categorize_by_name(tags_by_name: &BTreeMap<String, u32>) -> BTreeMap<String, u32> {
    let mut by_category: BTreeMap<String, u32> = BTreeMap::new();
    for (name, count) in tags_by_name {
        let mut category = tag_by_name(name)
            .map(|tag| tag.category.display_name())
            .unwrap_or(TagCategory::Other.display_name());
        if name == "Custom Template" {
            category = "Custom";
        }
        if name.contains("Google") {
            category = "Google";
        }
        if name.contains("Analytics") {
            category = "Analytics";
        }
        *by_category.entry(category.to_string()).or_insert(0) += count;
    }
    by_category
}
