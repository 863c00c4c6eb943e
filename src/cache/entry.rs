//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// The creation timestamp is diagnostic only; no policy consults it.
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry holding `value`.
    pub fn new(value: String) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
        }
    }

    // == Replace Value ==
    /// Overwrites the stored value in place.
    ///
    /// The creation timestamp is preserved: an overwrite replaces the
    /// payload, it does not create a new entry.
    pub fn replace(&mut self, value: String) {
        self.value = value;
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
