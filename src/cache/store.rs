//! Cache Store Module
//!
//! Key-value storage with TTL expiration. Generic over the cached value
//! type; payloads are opaque to the store. All operations are total
//! functions over the key space and never fail.

use std::collections::HashMap;
use std::time::Duration;

use regex::Regex;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory key-value store with per-entry TTL.
///
/// Expired entries are treated as absent: a lookup that finds one deletes
/// it as a side effect and reports a miss. There is no capacity bound and
/// no eviction policy; entries leave the store only through expiry or
/// explicit removal.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Hit/miss/expiration counters
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Retrieves the value for `key` if present and not expired.
    ///
    /// An expired entry is deleted as a side effect and reported as a
    /// miss. A clean hit or a true miss has no side effects beyond the
    /// counters.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Set ==
    /// Stores `value` under `key`, unconditionally overwriting any
    /// existing entry and recording the current time as the insertion
    /// timestamp.
    ///
    /// A zero `ttl` means "never cache": the call stores nothing, so the
    /// next lookup misses and refetches.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }
        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
    }

    // == Delete ==
    /// Removes the entry for `key` if present; no-op otherwise.
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Delete Matching ==
    /// Removes every entry whose key matches a glob-style pattern, where
    /// `*` matches any substring (e.g. `"blog:*"` removes `"blog:1"` and
    /// `"blog:2"` but not `"blogs:all"`).
    pub fn delete_matching(&mut self, pattern: &str) {
        let regex = glob_to_regex(pattern);
        self.entries.retain(|key, _| !regex.is_match(key));
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning the number removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();
        self.stats.record_expirations(removed as u64);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the store's counters and entry count.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included
    /// until they are purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Utility Functions ==
/// Compiles a glob pattern (`*` = any substring) into an anchored regex.
fn glob_to_regex(pattern: &str) -> Regex {
    let escaped = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{escaped}$")).expect("escaped glob is a valid regex")
}
