//! Bounded Store Module
//!
//! Fixed-capacity key-value container shared by every eviction policy.
//!
//! The store itself never decides to evict: admission control lives in the
//! policies. The store's job is membership, the capacity ceiling, hit/miss
//! accounting, and emitting the discard notification when a policy removes
//! a victim.

use std::collections::HashMap;

use tracing::info;

use crate::cache::{CacheEntry, CacheStats, MAX_ITEMS};

// == Bounded Store ==
/// Key-value storage with a fixed capacity ceiling.
#[derive(Debug)]
pub struct BoundedStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_items: usize,
}

impl BoundedStore {
    // == Constructor ==
    /// Creates a new store with the default [`MAX_ITEMS`] capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ITEMS)
    }

    /// Creates a new store holding at most `max_items` entries.
    pub fn with_capacity(max_items: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_items,
        }
    }

    /// Creates a store with no capacity ceiling, for the Basic policy.
    pub fn unbounded() -> Self {
        Self::with_capacity(usize::MAX)
    }

    // == Insert ==
    /// Inserts a key-value pair, overwriting the value in place if the key
    /// already exists.
    ///
    /// Never evicts on its own; callers must make room first. Inserting
    /// past the ceiling is a policy bug, so it trips in debug builds.
    pub fn insert(&mut self, key: &str, value: String) {
        match self.entries.get_mut(key) {
            Some(entry) => entry.replace(value),
            None => {
                debug_assert!(
                    self.entries.len() < self.max_items,
                    "insert past capacity ceiling"
                );
                self.entries.insert(key.to_string(), CacheEntry::new(value));
            }
        }
        self.stats.set_total_entries(self.entries.len());
    }

    // == Lookup ==
    /// Retrieves a value by key, recording a hit or a miss.
    ///
    /// Never mutates membership: a lookup cannot change what is cached,
    /// only the statistics.
    pub fn lookup(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Contains ==
    /// Checks key membership without touching statistics.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Evict ==
    /// Removes the policy-selected victim and emits the discard
    /// notification.
    ///
    /// The `DISCARD` line is logged synchronously, immediately after the
    /// removal it reports and before any subsequent admission.
    pub fn evict(&mut self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        info!("DISCARD: {}", key);
        self.stats.record_eviction();
        self.stats.set_total_entries(self.entries.len());
        Some(entry)
    }

    // == Capacity ==
    /// Returns true once the store has reached its capacity ceiling.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_items
    }

    /// Returns the capacity ceiling.
    pub fn capacity(&self) -> usize {
        self.max_items
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Inspection ==
    /// Iterates over current entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &CacheEntry)> {
        self.entries.iter()
    }

    /// Iterates over current keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    // == Stats ==
    /// Returns current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}

impl Default for BoundedStore {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new() {
        let store = BoundedStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), MAX_ITEMS);
    }

    #[test]
    fn test_store_insert_and_lookup() {
        let mut store = BoundedStore::new();

        store.insert("key1", "value1".to_string());

        assert_eq!(store.lookup("key1"), Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lookup_missing() {
        let mut store = BoundedStore::new();

        assert_eq!(store.lookup("nonexistent"), None);
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_store_overwrite_keeps_size() {
        let mut store = BoundedStore::new();

        store.insert("key1", "value1".to_string());
        store.insert("key1", "value2".to_string());

        assert_eq!(store.lookup("key1"), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_evict() {
        let mut store = BoundedStore::new();

        store.insert("key1", "value1".to_string());
        let evicted = store.evict("key1");

        assert!(evicted.is_some());
        assert!(store.is_empty());
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_store_evict_missing() {
        let mut store = BoundedStore::new();

        assert!(store.evict("nonexistent").is_none());
        assert_eq!(store.stats().evictions, 0);
    }

    #[test]
    fn test_store_is_full() {
        let mut store = BoundedStore::with_capacity(2);

        assert!(!store.is_full());
        store.insert("a", "1".to_string());
        store.insert("b", "2".to_string());
        assert!(store.is_full());
    }

    #[test]
    fn test_store_stats_accounting() {
        let mut store = BoundedStore::new();

        store.insert("key1", "value1".to_string());
        store.lookup("key1"); // hit
        store.lookup("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
