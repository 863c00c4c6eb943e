//! Poly Cache - a lightweight in-memory key-value cache
//!
//! Provides a fixed-capacity key-value store behind four interchangeable
//! eviction policies (FIFO, LIFO, LRU, MRU), plus an unbounded Basic
//! variant. Evictions are announced with a `DISCARD: <key>` log line.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{
    BasicCache, Cache, CacheEntry, CacheStats, FifoCache, LifoCache, LruCache, MruCache,
    PolicyKind, SharedCache, MAX_ITEMS,
};
pub use config::Config;
pub use error::{CacheError, Result};
