//! Store Module
//!
//! The seam between the HTTP front-end and the backing key-value store.
//! Handlers only see [`KeyValueStore`]; the concrete backend is picked at startup.

mod memory_store;
mod redis_store;
mod stats;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, StoreBackend};
use crate::error::Result;

// Re-export public types
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
pub use stats::{StatsSnapshot, StoreStats};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

// == Key Value Store ==
/// Primitives the front-end needs from a backing store.
///
/// Every method reports a failure to reach the store as
/// [`ProxyError::StoreUnavailable`](crate::error::ProxyError::StoreUnavailable).
/// Implementations must be safe to share across concurrently running requests.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Unconditionally stores `value` under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Returns true if `key` is present.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Stores `value` only when `key` is absent, as a single atomic step.
    ///
    /// Returns true if this call created the entry. Of any number of
    /// concurrent callers on the same absent key, exactly one sees true.
    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool>;

    /// Round-trips to the store without touching data.
    async fn ping(&self) -> Result<()>;

    /// Short backend label for logs and health output.
    fn backend_name(&self) -> &'static str;
}

// == Open Store ==
/// Builds the backend selected by `config`.
///
/// For Redis this opens the connection eagerly, so a bad address fails at
/// startup instead of on the first request.
pub async fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match config.backend {
        StoreBackend::Redis => Ok(Arc::new(RedisStore::connect(&config.store).await?)),
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
