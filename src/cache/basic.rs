//! Basic Cache Module
//!
//! The no-eviction variant: entries accumulate without bound.

use crate::cache::{BoundedStore, Cache, CacheEntry, CacheStats, PolicyKind};

// == Basic Cache ==
/// Unbounded cache with no eviction policy and no order track.
#[derive(Debug)]
pub struct BasicCache {
    /// Key-value storage
    store: BoundedStore,
}

impl BasicCache {
    // == Constructor ==
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self {
            store: BoundedStore::unbounded(),
        }
    }
}

impl Default for BasicCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache for BasicCache {
    fn put(&mut self, key: Option<String>, value: Option<String>) {
        let (Some(key), Some(value)) = (key, value) else {
            return;
        };
        self.store.insert(&key, value);
    }

    fn get(&mut self, key: Option<&str>) -> Option<String> {
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
        PolicyKind::Basic
    }
}
