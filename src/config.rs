//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment
//! variables.

use std::env;

use crate::cache::{Cache, PolicyKind, MAX_ITEMS};
use crate::error::Result;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Eviction policy to build
    pub policy: PolicyKind,
    /// Maximum number of entries a bounded policy may hold
    pub max_items: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_POLICY` - One of `basic`, `fifo`, `lifo`, `lru`, `mru`
    ///   (default: `lru`); unrecognized names are an error
    /// - `MAX_ITEMS` - Capacity ceiling (default: 4); non-numeric or zero
    ///   values fall back to the default
    pub fn from_env() -> Result<Self> {
        let policy = match env::var("CACHE_POLICY") {
            Ok(raw) => raw.parse()?,
            Err(_) => PolicyKind::Lru,
        };

        let max_items = env::var("MAX_ITEMS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(MAX_ITEMS);

        Ok(Self { policy, max_items })
    }

    /// Builds the configured cache instance.
    pub fn build(&self) -> Box<dyn Cache + Send> {
        self.policy.build(self.max_items)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Lru,
            max_items: MAX_ITEMS,
        }
    }
}
