//! Eviction Policy Module
//!
//! The shared contract every cache variant implements, plus runtime policy
//! selection.
//!
//! # Shared put/get contract
//! 1. `put` with an absent key or value is a silent no-op.
//! 2. `put` of an existing key overwrites the value in place and applies
//!    the policy's touch rule; occupancy never changes, so no eviction.
//! 3. `put` of a new key at capacity selects exactly one victim, removes
//!    it (emitting `DISCARD: <key>`), then admits the new entry.
//! 4. `get` of a present key returns the value and applies the policy's
//!    touch rule.
//! 5. `get` of an absent or `None` key returns `None` and leaves the
//!    order track untouched.

use std::fmt;
use std::str::FromStr;

use crate::cache::{
    BasicCache, CacheEntry, CacheStats, FifoCache, LifoCache, LruCache, MruCache,
};
use crate::error::CacheError;

// == Cache Trait ==
/// Common interface for all eviction policy variants.
///
/// Keys and values arrive as `Option` to model the absent-input contract:
/// a `None` key or value on `put` is ignored rather than rejected, and a
/// `None` key on `get` is an ordinary miss.
pub trait Cache {
    /// Stores a key-value pair, evicting per the policy if at capacity.
    fn put(&mut self, key: Option<String>, value: Option<String>);

    /// Retrieves a value by key; `None` is the not-found sentinel.
    fn get(&mut self, key: Option<&str>) -> Option<String>;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns a snapshot of current entries for inspection.
    ///
    /// Diagnostic only; the order is unspecified and not part of the
    /// eviction contract.
    fn entries(&self) -> Vec<(String, CacheEntry)>;

    /// Returns current statistics.
    fn stats(&self) -> CacheStats;

    /// Identifies the eviction policy in use.
    fn kind(&self) -> PolicyKind;

    /// Returns true if the cache is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Boxed Forwarding ==
/// Lets factory-built `Box<dyn Cache + Send>` values be used wherever a
/// concrete cache is expected (e.g. inside `SharedCache`).
impl<C: Cache + ?Sized> Cache for Box<C> {
    fn put(&mut self, key: Option<String>, value: Option<String>) {
        (**self).put(key, value);
    }

    fn get(&mut self, key: Option<&str>) -> Option<String> {
        (**self).get(key)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn entries(&self) -> Vec<(String, CacheEntry)> {
        (**self).entries()
    }

    fn stats(&self) -> CacheStats {
        (**self).stats()
    }

    fn kind(&self) -> PolicyKind {
        (**self).kind()
    }
}

// == Policy Kind ==
/// The available eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// No eviction; the cache grows without bound
    Basic,
    /// Evicts the oldest inserted key
    Fifo,
    /// Evicts the most recently inserted key
    Lifo,
    /// Evicts the least recently used key
    Lru,
    /// Evicts the most recently used key
    Mru,
}

impl PolicyKind {
    /// Canonical lowercase name, as accepted by configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Basic => "basic",
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lifo => "lifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Mru => "mru",
        }
    }

    // == Factory ==
    /// Builds a cache using this policy with the given capacity.
    ///
    /// `capacity` is ignored by [`PolicyKind::Basic`], which is unbounded.
    pub fn build(self, capacity: usize) -> Box<dyn Cache + Send> {
        match self {
            PolicyKind::Basic => Box::new(BasicCache::new()),
            PolicyKind::Fifo => Box::new(FifoCache::with_capacity(capacity)),
            PolicyKind::Lifo => Box::new(LifoCache::with_capacity(capacity)),
            PolicyKind::Lru => Box::new(LruCache::with_capacity(capacity)),
            PolicyKind::Mru => Box::new(MruCache::with_capacity(capacity)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(PolicyKind::Basic),
            "fifo" => Ok(PolicyKind::Fifo),
            "lifo" => Ok(PolicyKind::Lifo),
            "lru" => Ok(PolicyKind::Lru),
            "mru" => Ok(PolicyKind::Mru),
            other => Err(CacheError::UnknownPolicy(other.to_string())),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_from_str() {
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("LRU".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!("Mru".parse::<PolicyKind>().unwrap(), PolicyKind::Mru);
    }

    #[test]
    fn test_policy_kind_from_str_unknown() {
        let err = "clock".parse::<PolicyKind>().unwrap_err();
        assert!(matches!(err, CacheError::UnknownPolicy(ref name) if name == "clock"));
    }

    #[test]
    fn test_policy_kind_roundtrip() {
        for kind in [
            PolicyKind::Basic,
            PolicyKind::Fifo,
            PolicyKind::Lifo,
            PolicyKind::Lru,
            PolicyKind::Mru,
        ] {
            assert_eq!(kind.as_str().parse::<PolicyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_policy_build_reports_kind() {
        for kind in [
            PolicyKind::Basic,
            PolicyKind::Fifo,
            PolicyKind::Lifo,
            PolicyKind::Lru,
            PolicyKind::Mru,
        ] {
            let cache = kind.build(4);
            assert_eq!(cache.kind(), kind);
            assert!(cache.is_empty());
        }
    }

    #[test]
    fn test_policy_build_honors_capacity() {
        let mut cache = PolicyKind::Fifo.build(2);

        cache.put(Some("a".to_string()), Some("1".to_string()));
        cache.put(Some("b".to_string()), Some("2".to_string()));
        cache.put(Some("c".to_string()), Some("3".to_string()));

        assert_eq!(cache.len(), 2);
    }
}
