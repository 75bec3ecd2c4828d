//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a simple insertion-ordered model.

use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};

use crate::cache::{CacheStore, Lease, ManualClock};

// == Test Configuration ==
const TEST_CAPACITY: usize = 16;
const TEST_LEASE_MS: u64 = 1000;

// == Strategies ==
/// Keys from a small range so that overwrites and evictions happen often
fn key_strategy() -> impl Strategy<Value = u16> {
    0u16..48
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,32}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u16, value: String },
    Get { key: u16 },
    Remove { key: u16 },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Remove { key }),
        1 => (0u64..600).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

// == Reference Model ==
/// Insertion-ordered map with per-key age in milliseconds.
#[derive(Default)]
struct Model {
    order: VecDeque<u16>,
    entries: HashMap<u16, (String, u64)>,
    now_ms: u64,
}

impl Model {
    fn put(&mut self, key: u16, value: String, capacity: usize) -> Option<String> {
        let previous = self.entries.insert(key, (value, self.now_ms));
        if previous.is_none() {
            self.order.push_back(key);
            if self.order.len() > capacity {
                if let Some(eldest) = self.order.pop_front() {
                    self.entries.remove(&eldest);
                }
            }
        }
        previous.map(|(value, _)| value)
    }

    fn get(&mut self, key: u16, lease_ms: u64) -> Option<String> {
        let (value, inserted_at) = self.entries.get(&key)?.clone();
        if self.now_ms - inserted_at <= lease_ms {
            Some(value)
        } else {
            self.remove(key);
            None
        }
    }

    fn remove(&mut self, key: u16) -> Option<String> {
        self.order.retain(|k| *k != key);
        self.entries.remove(&key).map(|(value, _)| value)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every operation agrees with the model, including eviction order and
    // lazy expiry.
    #[test]
    fn prop_matches_insertion_order_model(ops in prop::collection::vec(cache_op_strategy(), 1..200)) {
        let clock = ManualClock::new();
        let mut store =
            CacheStore::with_clock(TEST_CAPACITY, Lease::Millis(TEST_LEASE_MS), clock.clone()).unwrap();
        let mut model = Model::default();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    let expected = model.put(key, value.clone(), TEST_CAPACITY);
                    prop_assert_eq!(store.put(key, value), expected);
                }
                CacheOp::Get { key } => {
                    let expected = model.get(key, TEST_LEASE_MS);
                    prop_assert_eq!(store.get(&key).cloned(), expected);
                }
                CacheOp::Remove { key } => {
                    prop_assert_eq!(store.remove(&key), model.remove(key));
                }
                CacheOp::Advance { ms } => {
                    clock.advance_ms(ms);
                    model.now_ms += ms;
                }
            }

            prop_assert_eq!(store.len(), model.entries.len());
            let keys: Vec<u16> = store.keys().copied().collect();
            prop_assert_eq!(keys, model.order.iter().copied().collect::<Vec<_>>());
        }
    }

    // No sequence of puts takes the cache past its capacity.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..20,
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..200)
    ) {
        let mut store = CacheStore::new(capacity, Lease::Forever).unwrap();

        for (key, value) in entries {
            store.put(key, value);
            prop_assert!(
                store.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                store.len(),
                capacity
            );
        }
    }

    // Filling past capacity with distinct keys evicts exactly the eldest ones.
    #[test]
    fn prop_eviction_order(capacity in 1usize..12, extra in 1usize..12) {
        let mut store = CacheStore::new(capacity, Lease::Forever).unwrap();
        let total = capacity + extra;

        for key in 0..total {
            store.put(key, key * 10);
        }

        prop_assert_eq!(store.len(), capacity);
        for key in 0..extra {
            prop_assert!(store.get(&key).is_none(), "key {} should be evicted", key);
        }
        for key in extra..total {
            prop_assert_eq!(store.get(&key), Some(&(key * 10)));
        }
        prop_assert_eq!(store.stats().evictions, extra as u64);
    }

    // Overwriting a key returns the old value and never reorders it.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_CAPACITY, Lease::Forever).unwrap();
        store.put(u16::MAX, "eldest".to_string());

        prop_assert_eq!(store.put(key, value1.clone()), None);
        prop_assert_eq!(store.put(key, value2.clone()), Some(value1));
        prop_assert_eq!(store.get(&key).cloned(), Some(value2));
        prop_assert_eq!(store.len(), 2);
        prop_assert_eq!(store.keys().next().copied(), Some(u16::MAX));
    }

    // A value is returned up to and including its lease, and dropped after.
    #[test]
    fn prop_lease_boundary(lease_ms in 0u64..5000, elapsed in 0u64..10_000) {
        let clock = ManualClock::new();
        let mut store = CacheStore::with_clock(TEST_CAPACITY, Lease::Millis(lease_ms), clock.clone()).unwrap();
        store.put(1u8, "value".to_string());

        clock.advance_ms(elapsed);
        let found = store.get(&1).is_some();

        prop_assert_eq!(found, elapsed <= lease_ms);
        prop_assert_eq!(store.len(), usize::from(found));
    }

    // Hits and misses add up to the number of lookups.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let clock = ManualClock::new();
        let mut store =
            CacheStore::with_clock(TEST_CAPACITY, Lease::Millis(TEST_LEASE_MS), clock.clone()).unwrap();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key, value);
                }
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Remove { key } => {
                    store.remove(&key);
                }
                CacheOp::Advance { ms } => clock.advance_ms(ms),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert!(stats.expirations <= stats.misses);
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }
}
