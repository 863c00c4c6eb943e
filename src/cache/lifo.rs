//! LIFO Cache Module
//!
//! Last-In-First-Out eviction: the most recently inserted key still
//! present is the victim. Tracked with a single "last inserted" pointer
//! rather than a full sequence.
//!
//! The pointer updates on every admitted insert of a new key, but NOT on
//! an overwrite of an existing key. That asymmetry is deliberate and load
//! bearing: after `put(a) put(b) put(a_again)`, the next victim is still
//! `b`.

use crate::cache::{BoundedStore, Cache, CacheEntry, CacheStats, PolicyKind, MAX_ITEMS};

// == LIFO Cache ==
/// Bounded cache that evicts the most recently inserted key.
#[derive(Debug, Default)]
pub struct LifoCache {
    /// Key-value storage
    store: BoundedStore,
    /// Most recently admitted key; the eviction victim when full
    last_key: Option<String>,
}

impl LifoCache {
    // == Constructor ==
    /// Creates a new empty cache with the default [`MAX_ITEMS`] capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ITEMS)
    }

    /// Creates a new empty cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: BoundedStore::with_capacity(capacity),
            last_key: None,
        }
    }

    // == Invariant ==
    /// The pointer must name a stored key whenever the store is non-empty.
    fn coherent(&self) -> bool {
        match &self.last_key {
            Some(key) => self.store.contains(key),
            None => self.store.is_empty(),
        }
    }
}

impl Cache for LifoCache {
    fn put(&mut self, key: Option<String>, value: Option<String>) {
        let (Some(key), Some(value)) = (key, value) else {
            return;
        };

        if self.store.contains(&key) {
            // Overwrite: value changes, the last-inserted pointer does not
            self.store.insert(&key, value);
        } else {
            if self.store.is_full() {
                if let Some(victim) = self.last_key.take() {
                    self.store.evict(&victim);
                }
            }
            self.store.insert(&key, value);
            self.last_key = Some(key);
        }

        debug_assert!(self.coherent(), "last-inserted pointer out of sync with store");
    }

    fn get(&mut self, key: Option<&str>) -> Option<String> {
        // Reads never move the last-inserted pointer
        self.store.lookup(key?)
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn entries(&self) -> Vec<(String, CacheEntry)> {
        self.store
            .entries()
            .map(|(k, e)| (k.clone(), e.clone()))
            .collect()
    }

    fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Lifo
    }
}
