//! Redis Store Module
//!
//! Network backend over a single multiplexed Redis connection.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::store::KeyValueStore;

// == Redis Store ==
/// Redis-backed store.
///
/// Holds one [`ConnectionManager`] for the lifetime of the process. Cloning the
/// manager is cheap and every clone shares the same multiplexed connection, so
/// each call clones it instead of locking.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Opens the connection described by `config`.
    ///
    /// Fails with `StoreUnavailable` when the URL is invalid or the server
    /// cannot be reached.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        debug!("Connecting to {}", config.redacted_url());

        let client = Client::open(config.connection_info())?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let present: bool = conn.exists(key).await?;
        Ok(present)
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        // SETNX answers 1 when it created the key and 0 otherwise
        let mut conn = self.conn.clone();
        let created: bool = conn.set_nx(key, value).await?;
        Ok(created)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
