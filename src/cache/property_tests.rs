//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache contract over generated operation sequences.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

use crate::cache::{CacheStore, ManualClock, CACHE_TTL_MS, MAX_ENTRIES};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 50;

// == Strategies ==
/// Generates cache keys shaped like the proxy keys
fn key_strategy() -> impl Strategy<Value = String> {
    ("(tmdb:search|rawg:details|ol:works)", "[a-zA-Z0-9_]{1,24}")
        .prop_map(|(ns, param)| format!("{ns}:{param}"))
}

/// Generates small JSON payloads
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,32}".prop_map(|s| json!({ "title": s })),
        prop::collection::vec(any::<u16>(), 0..5).prop_map(|v| json!({ "results": v })),
    ]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Value },
    Get { key: String },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => (0..CACHE_TTL_MS).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

fn unique(keys: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.into_iter().filter(|k| seen.insert(k.clone())).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A value is readable for the whole TTL window and gone from its end.
    #[test]
    fn prop_ttl_expiry_window(
        key in key_strategy(),
        value in value_strategy(),
        t0 in 0u64..1_000_000_000,
        offset in 0..CACHE_TTL_MS,
        late in 0u64..1_000_000,
    ) {
        let clock = Arc::new(ManualClock::new(t0));
        let mut store = CacheStore::with_clock(clock.clone());
        store.set(key.clone(), value.clone());

        clock.set(t0 + offset);
        prop_assert_eq!(store.get(&key), Some(value));

        clock.set(t0 + CACHE_TTL_MS + late);
        prop_assert_eq!(store.get(&key), None);
        prop_assert!(!store.contains_key(&key));
    }

    // The store never holds more than its capacity once a write completes.
    #[test]
    fn prop_size_bound(ops in prop::collection::vec(cache_op_strategy(), 1..300)) {
        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_limits(TEST_MAX_ENTRIES, CACHE_TTL_MS, clock.clone());

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value);
                    prop_assert!(
                        store.len() <= TEST_MAX_ENTRIES,
                        "Cache size {} exceeds max {}",
                        store.len(),
                        TEST_MAX_ENTRIES
                    );
                }
                CacheOp::Get { key } => {
                    store.get(&key);
                }
                CacheOp::Advance { ms } => clock.advance(ms),
            }
        }
    }

    // Each expired read removes exactly one entry.
    #[test]
    fn prop_lazy_eviction(keys in prop::collection::vec(key_strategy(), 1..40)) {
        let keys = unique(keys);
        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_clock(clock.clone());

        for key in &keys {
            store.set(key.clone(), json!(key));
        }
        clock.advance(CACHE_TTL_MS);

        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(store.len(), keys.len() - i);
            prop_assert_eq!(store.get(key), None);
            prop_assert_eq!(store.len(), keys.len() - i - 1);
        }
    }

    // At capacity with nothing expired, a new key evicts the first inserted,
    // regardless of which keys were read since.
    #[test]
    fn prop_oldest_inserted_is_evicted(
        keys in prop::collection::vec(key_strategy(), 2..20),
        reads in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
        new_key in key_strategy(),
    ) {
        let keys = unique(keys);
        prop_assume!(keys.len() >= 2);
        prop_assume!(!keys.contains(&new_key));

        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_limits(keys.len(), CACHE_TTL_MS, clock.clone());
        for key in &keys {
            store.set(key.clone(), json!(key));
            clock.advance(1);
        }

        for idx in reads {
            let key = idx.get(&keys);
            prop_assert!(store.get(key).is_some());
        }

        store.set(new_key.clone(), json!("new"));

        prop_assert_eq!(store.len(), keys.len());
        prop_assert!(!store.contains_key(&keys[0]), "Oldest key should have been evicted");
        for key in keys.iter().skip(1) {
            prop_assert!(store.contains_key(key), "Key '{}' should remain", key);
        }
        prop_assert!(store.contains_key(&new_key));
    }

    // Overwriting returns the newest value and keeps the entry count.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
        gap in 0..CACHE_TTL_MS,
    ) {
        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_clock(clock.clone());

        store.set(key.clone(), v1);
        let count = store.len();
        clock.advance(gap);
        store.set(key.clone(), v2.clone());

        prop_assert_eq!(store.len(), count);
        prop_assert_eq!(store.get(&key), Some(v2));
    }

    // Hit and miss counters match what the caller observed.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_limits(TEST_MAX_ENTRIES, CACHE_TTL_MS, clock.clone());
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => store.set(key, value),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Advance { ms } => clock.advance(ms),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.len());
    }
}

// == Concurrent Access ==
// Writers and readers share one store behind the same lock the server uses.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_concurrent_writes_respect_bound(
        keys in prop::collection::vec(key_strategy(), 10..120),
    ) {
        use tokio::sync::RwLock;

        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let clock = Arc::new(ManualClock::new(0));
            let store = Arc::new(RwLock::new(CacheStore::with_limits(
                TEST_MAX_ENTRIES,
                CACHE_TTL_MS,
                clock,
            )));

            let mut handles = vec![];
            for key in keys {
                let store = Arc::clone(&store);
                handles.push(tokio::spawn(async move {
                    let mut cache = store.write().await;
                    cache.set(key.clone(), json!(key));
                    let len = cache.len();
                    drop(cache);

                    let read = store.write().await.get(&key);
                    (len, read)
                }));
            }

            for handle in handles {
                let (len, read) = handle.await.expect("Task should not panic");
                prop_assert!(len <= TEST_MAX_ENTRIES);
                if let Some(value) = read {
                    prop_assert!(value.is_string());
                }
            }

            prop_assert!(store.read().await.len() <= TEST_MAX_ENTRIES);
            Ok(())
        })?;
    }
}

// == Edge Cases ==
mod tests {
    use super::*;

    #[test]
    fn test_burst_at_default_capacity_evicts_one_per_insert() {
        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_clock(clock);

        for i in 0..MAX_ENTRIES {
            store.set(format!("k{i}"), json!(i));
        }
        let before = store.stats().evictions;

        store.set("extra1", json!(1));
        store.set("extra2", json!(2));

        assert_eq!(store.stats().evictions - before, 2);
        assert_eq!(store.len(), MAX_ENTRIES);
    }
}
