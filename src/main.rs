//! Poly Cache - demo driver
//!
//! Builds the configured eviction policy and walks it through the
//! canonical exercise sequence: fill to capacity, touch an entry,
//! overflow, then inspect the result.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use poly_cache::{Cache, Config};

/// Main entry point for the demo driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the configured cache policy
/// 4. Run the exercise sequence and dump state and statistics
fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poly_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Poly Cache demo");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: policy={}, max_items={}",
        config.policy, config.max_items
    );

    let mut cache = config.build();

    // Fill to capacity
    for (key, value) in [("A", "Hello"), ("B", "World"), ("C", "Cache"), ("D", "School")] {
        cache.put(Some(key.to_string()), Some(value.to_string()));
    }
    dump(cache.as_ref());

    // Touch A, then overflow; which key gets discarded depends on policy
    match cache.get(Some("A")) {
        Some(value) => info!("GET A -> {}", value),
        None => info!("GET A -> miss"),
    }
    cache.put(Some("E".to_string()), Some("Battery".to_string()));
    dump(cache.as_ref());

    let stats = cache.stats();
    info!("Statistics: {}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

/// Logs the current cache contents, one line per entry.
fn dump(cache: &(dyn Cache + Send)) {
    info!("Current cache ({} entries):", cache.len());
    let mut entries = cache.entries();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (key, entry) in entries {
        info!("{}: {}", key, entry.value);
    }
}
