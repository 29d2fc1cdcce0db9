//! Property-Based Tests for the Store Module
//!
//! Checks first-write-wins semantics of `set_if_absent` against arbitrary
//! operation sequences, using the in-memory backend as the reference store.

use std::collections::HashMap;
use std::sync::Arc;

use proptest::prelude::*;

use crate::store::{KeyValueStore, MemoryStore};

// == Strategies ==
/// Generates valid keys from a small alphabet so sequences revisit keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}".prop_map(|s| s)
}

/// Generates values, including the empty string
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,32}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum StoreOp {
    SetIfAbsent { key: String, value: String },
    Get { key: String },
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| StoreOp::SetIfAbsent { key, value }),
        key_strategy().prop_map(|key| StoreOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of conditional sets and reads, the store agrees with a
    // model where the first write to each key is kept and later ones rejected.
    #[test]
    fn prop_first_write_wins(ops in prop::collection::vec(store_op_strategy(), 1..60)) {
        let store = MemoryStore::new();
        let mut model: HashMap<String, String> = HashMap::new();

        tokio_test::block_on(async {
            for op in ops {
                match op {
                    StoreOp::SetIfAbsent { key, value } => {
                        let created = store.set_if_absent(&key, &value).await.unwrap();
                        let expected = !model.contains_key(&key);
                        prop_assert_eq!(created, expected, "set_if_absent on {:?}", key);
                        model.entry(key).or_insert(value);
                    }
                    StoreOp::Get { key } => {
                        let got = store.get(&key).await.unwrap();
                        prop_assert_eq!(got.as_ref(), model.get(&key));
                    }
                }
            }
            prop_assert_eq!(store.len().await, model.len());
            Ok(())
        })?;
    }

    // Reading a key never changes what is stored.
    #[test]
    fn prop_get_is_idempotent(key in key_strategy(), value in value_strategy(), reads in 1usize..10) {
        let store = MemoryStore::new();

        tokio_test::block_on(async {
            store.set_if_absent(&key, &value).await.unwrap();
            for _ in 0..reads {
                let got = store.get(&key).await.unwrap();
                prop_assert_eq!(got.as_deref(), Some(value.as_str()));
            }
            prop_assert_eq!(store.len().await, 1);
            Ok(())
        })?;
    }
}

// Separate block with fewer cases for the multi-threaded race
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Concurrent conditional sets on one key produce exactly one winner, and
    // the stored value is the winner's.
    #[test]
    fn prop_concurrent_set_if_absent_single_winner(
        key in key_strategy(),
        values in prop::collection::vec(value_strategy(), 2..16)
    ) {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(4)
            .build()
            .unwrap();

        rt.block_on(async {
            let store = Arc::new(MemoryStore::new());

            let handles: Vec<_> = values
                .iter()
                .cloned()
                .map(|value| {
                    let store = Arc::clone(&store);
                    let key = key.clone();
                    tokio::spawn(async move {
                        let created = store.set_if_absent(&key, &value).await.unwrap();
                        (created, value)
                    })
                })
                .collect();

            let mut winners = Vec::new();
            for handle in handles {
                let (created, value) = handle.await.expect("Task should not panic");
                if created {
                    winners.push(value);
                }
            }

            prop_assert_eq!(winners.len(), 1, "exactly one writer must win");
            let stored = store.get(&key).await.unwrap();
            prop_assert_eq!(stored.as_ref(), winners.first());
            Ok(())
        })?;
    }
}
