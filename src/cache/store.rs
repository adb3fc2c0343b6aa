//! Result Cache Store
//!
//! Memoizes paginated, filtered, sorted list results per query key with a
//! fixed TTL and explicit owner-key invalidation on mutation.

use std::collections::HashMap;

use crate::cache::{key, CacheEntry, CacheStats};
use crate::models::TaskPage;

// == Result Cache ==
/// Per-query result cache for list pages.
///
/// Every operation is infallible from the caller's point of view: a lookup
/// either produces a fresh page or a miss, so a degraded cache can never
/// fail a request. Callers fall back to recomputing on any miss.
#[derive(Debug)]
pub struct ResultCache {
    /// Key-value storage of cached pages
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds applied to every entry
    ttl: u64,
}

impl ResultCache {
    // == Constructor ==
    /// Creates a new ResultCache with the given TTL in seconds.
    pub fn new(ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Retrieves a cached page by key.
    ///
    /// Returns None on a miss. Expired entries are removed on access and
    /// counted as misses.
    pub fn get(&mut self, cache_key: &str) -> Option<TaskPage> {
        match self.entries.get(cache_key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(cache_key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a page under the given key with the configured TTL.
    ///
    /// If the key already exists, the value is overwritten and TTL is reset.
    pub fn set(&mut self, cache_key: String, value: TaskPage) {
        let entry = CacheEntry::new(value, self.ttl);
        self.entries.insert(cache_key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Invalidate ==
    /// Removes the single canonical entry for an owner.
    ///
    /// Called by every mutation (create/update/delete). Combination-specific
    /// list keys for the same owner are deliberately left in place and age
    /// out via TTL; see the key module for the trade-off.
    pub fn invalidate(&mut self, owner: &str) {
        self.entries.remove(&key::owner_key(owner));
        self.stats.record_invalidation();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(k, _)| k.clone())
            .collect();

        let count = expired_keys.len();

        for k in expired_keys {
            self.entries.remove(&k);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the current number of cached pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
