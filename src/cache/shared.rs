//! Shared Cache Module
//!
//! Thread-safe wrapper for handing one cache instance to several owners.
//!
//! Every operation takes the instance lock for its whole duration, so
//! victim selection, store mutation, order-track mutation and the discard
//! notification are observed as a single atomic step. The store and its
//! order track can never be seen in a mutually inconsistent state.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{Cache, CacheEntry, CacheStats, PolicyKind};

// == Shared Cache ==
/// A clonable handle to a mutex-guarded cache.
pub struct SharedCache<C: Cache> {
    /// The guarded cache instance
    inner: Arc<Mutex<C>>,
}

impl<C: Cache> SharedCache<C> {
    // == Constructor ==
    /// Wraps a cache for shared use.
    pub fn new(cache: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    // == Put ==
    /// Stores a key-value pair as one critical section.
    pub fn put(&self, key: Option<String>, value: Option<String>) {
        self.inner.lock().put(key, value);
    }

    // == Get ==
    /// Retrieves a value by key as one critical section.
    pub fn get(&self, key: Option<&str>) -> Option<String> {
        self.inner.lock().get(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    // == Inspection ==
    /// Returns a snapshot of current entries.
    pub fn entries(&self) -> Vec<(String, CacheEntry)> {
        self.inner.lock().entries()
    }

    /// Returns current statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Identifies the eviction policy in use.
    pub fn kind(&self) -> PolicyKind {
        self.inner.lock().kind()
    }
}

impl<C: Cache> Clone for SharedCache<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{FifoCache, LruCache, MAX_ITEMS};
    use std::thread;

    #[test]
    fn test_shared_put_and_get() {
        let cache = SharedCache::new(LruCache::new());

        cache.put(Some("key1".to_string()), Some("value1".to_string()));

        assert_eq!(cache.get(Some("key1")), Some("value1".to_string()));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.kind(), PolicyKind::Lru);
    }

    #[test]
    fn test_shared_clone_sees_same_instance() {
        let cache = SharedCache::new(FifoCache::new());
        let other = cache.clone();

        cache.put(Some("key1".to_string()), Some("value1".to_string()));

        assert_eq!(other.get(Some("key1")), Some("value1".to_string()));
    }

    #[test]
    fn test_shared_concurrent_writers_hold_capacity() {
        let cache = SharedCache::new(LruCache::new());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let key = format!("t{}_k{}", t, i);
                        cache.put(Some(key.clone()), Some(format!("v{}", i)));
                        let _ = cache.get(Some(key.as_str()));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("writer thread panicked");
        }

        assert!(cache.len() <= MAX_ITEMS);
        let stats = cache.stats();
        assert_eq!(stats.total_entries, cache.len());
    }
}
