//! Time-boxed in-memory cache for container analyses.
//!
//! Keyed by URL with per-entry TTL and an oldest-first size cap. The core
//! extract/classify pipeline is stateless; callers own one of these and pass
//! it in, so repeated scans of the same container within the TTL reuse the
//! prior result instead of refetching.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::{CACHE_TTL, MAX_CACHE_ENTRIES};
use crate::models::ContainerReport;

struct CacheEntry<V> {
    value: V,
    cached_at: Instant,
    ttl: Duration,
}

/// A TTL cache with a bounded entry count.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    default_ttl: Duration,
    max_entries: usize,
}

/// Cache of per-URL container reports with the default policy
/// (5-minute TTL, 50 entries).
pub type AnalysisCache = TtlCache<ContainerReport>;

impl<V: Clone> TtlCache<V> {
    pub fn new(default_ttl: Duration, max_entries: usize) -> Self {
        TtlCache {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
            max_entries,
        }
    }

    /// Returns the cached value for `key` if present and not expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some(entry) if entry.cached_at.elapsed() < entry.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Inserts with the default TTL.
    pub fn insert(&self, key: &str, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    /// Inserts with an explicit TTL, evicting oldest entries past the cap.
    pub fn insert_with_ttl(&self, key: &str, value: V, ttl: Duration) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                cached_at: Instant::now(),
                ttl,
            },
        );
        while entries.len() > self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.cached_at)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => entries.remove(&key),
                None => break,
            };
        }
    }

    /// Drops every expired entry. Returns the number removed.
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        let before = entries.len();
        entries.retain(|_, entry| entry.cached_at.elapsed() < entry.ttl);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        TtlCache::new(CACHE_TTL, MAX_CACHE_ENTRIES)
    }
}
