//! MRU Cache Module
//!
//! Most-Recently-Used eviction: the victim is the key touched last
//! before the overflow. Useful for cyclic access patterns where the item
//! just used is the least likely to be needed again.

use crate::cache::{
    BoundedStore, Cache, CacheEntry, CacheStats, OrderTracker, PolicyKind, MAX_ITEMS,
};

// == MRU Cache ==
/// Bounded cache that evicts the most recently used key.
#[derive(Debug, Default)]
pub struct MruCache {
    /// Key-value storage
    store: BoundedStore,
    /// Keys by recency (front = least recent, back = most recent)
    order: OrderTracker,
}

impl MruCache {
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

impl Cache for MruCache {
    fn put(&mut self, key: Option<String>, value: Option<String>) {
        let (Some(key), Some(value)) = (key, value) else {
            return;
        };

        if self.store.contains(&key) {
            // Overwrite counts as a use
            self.store.insert(&key, value);
            self.order.move_to_back(&key);
        } else {
            if self.store.is_full() {
                // Victim sits at the back: the key touched most recently
                if let Some(victim) = self.order.pop_back() {
                    self.store.evict(&victim);
                }
            }
            self.store.insert(&key, value);
            self.order.push_back(&key);
        }

        debug_assert!(self.coherent(), "order track out of sync with store");
    }

    fn get(&mut self, key: Option<&str>) -> Option<String> {
        let key = key?;
        let value = self.store.lookup(key)?;
        self.order.move_to_back(key);
        Some(value)
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
        PolicyKind::Mru
    }
}
