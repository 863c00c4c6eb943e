//! Policy Scenario Tests
//!
//! End-to-end walks of each eviction policy through the public surface:
//! fill a capacity-4 cache with A..D, touch per the scenario, overflow
//! with E, and check exactly which key was discarded.

use poly_cache::{
    BasicCache, Cache, Config, FifoCache, LifoCache, LruCache, MruCache, PolicyKind,
    SharedCache, MAX_ITEMS,
};

// == Helpers ==
fn put(cache: &mut impl Cache, key: &str, value: &str) {
    cache.put(Some(key.to_string()), Some(value.to_string()));
}

fn fill_abcd(cache: &mut impl Cache) {
    put(cache, "A", "Hello");
    put(cache, "B", "World");
    put(cache, "C", "Cache");
    put(cache, "D", "School");
}

fn sorted_keys(cache: &impl Cache) -> Vec<String> {
    let mut keys: Vec<String> = cache.entries().into_iter().map(|(k, _)| k).collect();
    keys.sort();
    keys
}

// == FIFO ==
#[test]
fn fifo_overflow_discards_oldest_insert() {
    let mut cache = FifoCache::new();
    fill_abcd(&mut cache);

    put(&mut cache, "E", "Battery");

    assert_eq!(sorted_keys(&cache), vec!["B", "C", "D", "E"]);
    assert_eq!(cache.get(Some("A")), None);
    assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn fifo_overwrite_does_not_refresh_position() {
    let mut cache = FifoCache::new();
    fill_abcd(&mut cache);

    // Overwriting A keeps it first in line for eviction
    put(&mut cache, "A", "Updated");
    put(&mut cache, "E", "Battery");

    assert_eq!(sorted_keys(&cache), vec!["B", "C", "D", "E"]);
}

// == LIFO ==
#[test]
fn lifo_overflow_discards_last_insert() {
    let mut cache = LifoCache::new();
    fill_abcd(&mut cache);

    put(&mut cache, "E", "Battery");

    assert_eq!(sorted_keys(&cache), vec!["A", "B", "C", "E"]);
    assert_eq!(cache.get(Some("D")), None);
}

#[test]
fn lifo_overwrite_leaves_last_inserted_pointer() {
    let mut cache = LifoCache::new();
    fill_abcd(&mut cache);

    // Overwriting B is not an insert; D stays the next victim
    put(&mut cache, "B", "Updated");
    put(&mut cache, "E", "Battery");

    assert_eq!(sorted_keys(&cache), vec!["A", "B", "C", "E"]);
    assert_eq!(cache.get(Some("B")), Some("Updated".to_string()));
}

// == LRU ==
#[test]
fn lru_overflow_discards_least_recently_used() {
    let mut cache = LruCache::new();
    fill_abcd(&mut cache);

    // A becomes most recent; B is now the stalest key
    assert_eq!(cache.get(Some("A")), Some("Hello".to_string()));
    put(&mut cache, "E", "Battery");

    assert_eq!(sorted_keys(&cache), vec!["A", "C", "D", "E"]);
    assert_eq!(cache.get(Some("B")), None);
}

// == MRU ==
#[test]
fn mru_overflow_discards_most_recently_used() {
    let mut cache = MruCache::new();
    fill_abcd(&mut cache);

    // D was touched last, so D is the victim
    assert_eq!(cache.get(Some("D")), Some("School".to_string()));
    put(&mut cache, "E", "Battery");

    assert_eq!(sorted_keys(&cache), vec!["A", "B", "C", "E"]);
    assert_eq!(cache.get(Some("D")), None);
}

// == Basic ==
#[test]
fn basic_grows_past_max_items() {
    let mut cache = BasicCache::new();
    fill_abcd(&mut cache);

    put(&mut cache, "E", "Battery");
    put(&mut cache, "F", "Cell");

    assert_eq!(cache.len(), 6);
    assert!(cache.len() > MAX_ITEMS);
    assert_eq!(cache.stats().evictions, 0);
}

// == Shared Contract ==
#[test]
fn every_policy_ignores_absent_inputs() {
    for kind in [
        PolicyKind::Basic,
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
    ] {
        let mut cache = kind.build(MAX_ITEMS);

        cache.put(None, Some("value".to_string()));
        cache.put(Some("key".to_string()), None);

        assert!(cache.is_empty(), "{kind}: absent input was stored");
        assert_eq!(cache.get(None), None, "{kind}: None key did not miss");
    }
}

#[test]
fn every_policy_returns_sentinel_on_miss() {
    for kind in [
        PolicyKind::Basic,
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
    ] {
        let mut cache = kind.build(MAX_ITEMS);
        put(&mut cache, "present", "value");

        assert_eq!(cache.get(Some("absent")), None, "{kind}: miss not None");
        assert_eq!(cache.stats().misses, 1, "{kind}: miss not counted");
    }
}

#[test]
fn every_bounded_policy_holds_capacity_under_churn() {
    for kind in [
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
    ] {
        let mut cache = kind.build(MAX_ITEMS);

        for i in 0..50 {
            put(&mut cache, &format!("key{}", i % 7), &format!("value{}", i));
            assert!(cache.len() <= MAX_ITEMS, "{kind}: exceeded capacity");
        }
    }
}

// == Configuration ==
#[test]
fn config_builds_policy_from_name() {
    let policy: PolicyKind = "mru".parse().expect("known policy name");
    let config = Config {
        policy,
        max_items: MAX_ITEMS,
    };

    let mut cache = config.build();
    fill_abcd(&mut cache);
    assert_eq!(cache.get(Some("D")), Some("School".to_string()));
    put(&mut cache, "E", "Battery");

    assert_eq!(cache.kind(), PolicyKind::Mru);
    assert_eq!(cache.get(Some("D")), None);
}

#[test]
fn config_rejects_unknown_policy_name() {
    assert!("arc".parse::<PolicyKind>().is_err());
}

// == Shared Cache ==
#[test]
fn shared_cache_serializes_whole_operations() {
    let cache = SharedCache::new(LruCache::new());

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let cache = cache.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    cache.put(
                        Some(format!("t{}_{}", t, i)),
                        Some(format!("value{}", i)),
                    );
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().expect("writer panicked");
    }

    // The lock serializes eviction + admission, so the ceiling holds and
    // the snapshot agrees with len()
    assert!(cache.len() <= MAX_ITEMS);
    assert_eq!(cache.entries().len(), cache.len());
}
