//! Cache Module
//!
//! In-memory key-value caching with pluggable eviction policies.

mod basic;
mod entry;
mod fifo;
mod lifo;
mod lru;
mod mru;
mod policy;
mod shared;
mod stats;
mod store;
mod tracker;


// Re-export public types
pub use basic::BasicCache;
pub use entry::CacheEntry;
pub use fifo::FifoCache;
pub use lifo::LifoCache;
pub use lru::LruCache;
pub use mru::MruCache;
pub use policy::{Cache, PolicyKind};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::BoundedStore;
pub use tracker::OrderTracker;

// == Public Constants ==
/// Default maximum number of entries a bounded policy may hold
pub const MAX_ITEMS: usize = 4;
