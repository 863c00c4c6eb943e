//! FIFO Cache Module
//!
//! First-In-First-Out eviction: the oldest inserted key is the victim.
//! Neither reads nor overwrites reorder the track; only admission of a
//! new key appends to it.

use crate::cache::{
    BoundedStore, Cache, CacheEntry, CacheStats, OrderTracker, PolicyKind, MAX_ITEMS,
};

// == FIFO Cache ==
/// Bounded cache that evicts in insertion order.
#[derive(Debug, Default)]
pub struct FifoCache {
    /// Key-value storage
    store: BoundedStore,
    /// Keys in insertion order (front = oldest)
    order: OrderTracker,
}

impl FifoCache {
    // == Constructor ==
    /// Creates a new empty cache with the default [`MAX_ITEMS`] capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ITEMS)
    }

    /// Creates a new empty cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: BoundedStore::with_capacity(capacity),
            order: OrderTracker::new(),
        }
    }

    // == Invariant ==
    /// Order track and store must always agree on membership.
    fn coherent(&self) -> bool {
        self.order.len() == self.store.len()
            && self.store.keys().all(|k| self.order.contains(k))
    }
}

impl Cache for FifoCache {
    fn put(&mut self, key: Option<String>, value: Option<String>) {
        let (Some(key), Some(value)) = (key, value) else {
            return;
        };

        if self.store.contains(&key) {
            // Overwrite in place; FIFO keeps the original insertion slot
            self.store.insert(&key, value);
        } else {
            if self.store.is_full() {
                if let Some(victim) = self.order.pop_front() {
                    self.store.evict(&victim);
                }
            }
            self.store.insert(&key, value);
            self.order.push_back(&key);
        }

        debug_assert!(self.coherent(), "order track out of sync with store");
    }

    fn get(&mut self, key: Option<&str>) -> Option<String> {
        // Reads never reorder under FIFO
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
        PolicyKind::Fifo
    }
}
