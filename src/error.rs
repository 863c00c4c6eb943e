//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.
//!
//! Cache misses and absent inputs are deliberately NOT errors: a miss is
//! the `None` sentinel and an absent `put` input is a silent no-op. Only
//! configuration problems surface here.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache library.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Eviction policy name not recognized by configuration
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache library.
pub type Result<T> = std::result::Result<T, CacheError>;
