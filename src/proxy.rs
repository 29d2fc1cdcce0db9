//! Request Router & Store Adapter
//!
//! Turns the three user-facing operations into store calls and store answers
//! into outcomes. Knows nothing about HTTP.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{ProxyError, Result};
use crate::models::{greeting, GetOutcome, SetOutcome};
use crate::store::{KeyValueStore, StatsSnapshot, StoreStats};

// == Kv Proxy ==
/// Front-end over a single shared store handle.
pub struct KvProxy {
    /// Display name embedded in every response
    app_name: String,
    /// Long-lived handle to the backing store
    store: Arc<dyn KeyValueStore>,
    /// Outcome counters
    stats: StoreStats,
}

impl KvProxy {
    /// Creates a proxy answering as `app_name` over `store`.
    pub fn new(app_name: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            app_name: app_name.into(),
            store,
            stats: StoreStats::new(),
        }
    }

    /// Display name embedded in every response.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The backing store handle.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    // == Greet ==
    /// Static greeting; never touches the store.
    pub fn greet(&self) -> String {
        greeting(&self.app_name)
    }

    // == Conditional Set ==
    /// Writes `value` under `key` only if the key is absent.
    ///
    /// The existence check and the write are one atomic store call, so
    /// concurrent callers on the same key get exactly one `Stored`.
    pub async fn conditional_set(&self, key: &str, value: &str) -> Result<SetOutcome> {
        let created = self
            .store
            .set_if_absent(key, value)
            .await
            .map_err(|e| self.store_failed("set", key, e))?;

        if created {
            debug!(key, "Stored new key");
            self.stats.record_stored();
            Ok(SetOutcome::Stored)
        } else {
            debug!(key, "Key already exists, write skipped");
            self.stats.record_conflict();
            Ok(SetOutcome::AlreadyExists)
        }
    }

    // == Get ==
    /// Reads the value under `key`. No side effects on stored data.
    pub async fn get(&self, key: &str) -> Result<GetOutcome> {
        let value = self
            .store
            .get(key)
            .await
            .map_err(|e| self.store_failed("get", key, e))?;

        match value {
            Some(value) => {
                self.stats.record_hit();
                Ok(GetOutcome::Found(value))
            }
            None => {
                self.stats.record_miss();
                Ok(GetOutcome::Missing)
            }
        }
    }

    // == Stats ==
    /// Returns a snapshot of the outcome counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    fn store_failed(&self, op: &str, key: &str, err: ProxyError) -> ProxyError {
        warn!(op, key, backend = self.store.backend_name(), error = %err, "Store call failed");
        self.stats.record_store_error();
        err
    }
}
