//! Configuration Module
//!
//! Loads the process configuration from environment variables once at startup.
//! The resulting [`Config`] is immutable and handed to the router by value.

use std::env;
use std::str::FromStr;

use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

/// Which backing store the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Remote Redis server
    Redis,
    /// In-process map, for local runs without a Redis server
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

/// Connection parameters for the Redis store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Target host
    pub host: String,
    /// Target port
    pub port: u16,
    /// Logical database index
    pub db: i64,
    /// Auth credential; empty means no password
    pub password: String,
}

impl StoreConfig {
    /// Builds the client connection parameters.
    ///
    /// The fields go to the client as-is, so passwords with URL-reserved
    /// characters and IPv6 host literals need no escaping.
    pub fn connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            addr: ConnectionAddr::Tcp(self.host.clone(), self.port),
            redis: RedisConnectionInfo {
                db: self.db,
                username: None,
                password: (!self.password.is_empty()).then(|| self.password.clone()),
                ..Default::default()
            },
        }
    }

    /// `redis://` form of these parameters with the password masked. Logs only.
    pub fn redacted_url(&self) -> String {
        let host = if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        if self.password.is_empty() {
            format!("redis://{}:{}/{}", host, self.port, self.db)
        } else {
            format!("redis://:***@{}:{}/{}", host, self.port, self.db)
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "redis".to_string(),
            port: 6379,
            db: 0,
            password: String::new(),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Display name embedded in every response
    pub app_name: String,
    /// HTTP server port
    pub server_port: u16,
    /// Backing store selection
    pub backend: StoreBackend,
    /// Redis connection parameters
    pub store: StoreConfig,
    /// Interval in seconds between store health checks
    pub health_check_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `APP_NAME` - Display name (default: kv_front)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `STORE_BACKEND` - `redis` or `memory` (default: redis)
    /// - `REDIS_HOST` - Store host (default: redis)
    /// - `REDIS_PORT` - Store port (default: 6379)
    /// - `REDIS_DB` - Logical database index (default: 0)
    /// - `REDIS_PASSWORD` - Store password, empty for none (default: empty)
    /// - `HEALTH_CHECK_INTERVAL` - Seconds between store pings (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            app_name: env::var("APP_NAME").unwrap_or(defaults.app_name),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            backend: parse_var("STORE_BACKEND").unwrap_or(defaults.backend),
            store: StoreConfig {
                host: env::var("REDIS_HOST").unwrap_or(defaults.store.host),
                port: parse_var("REDIS_PORT").unwrap_or(defaults.store.port),
                db: parse_var("REDIS_DB").unwrap_or(defaults.store.db),
                password: env::var("REDIS_PASSWORD").unwrap_or(defaults.store.password),
            },
            health_check_interval: parse_var("HEALTH_CHECK_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.health_check_interval),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "kv_front".to_string(),
            server_port: 5000,
            backend: StoreBackend::Redis,
            store: StoreConfig::default(),
            health_check_interval: 5,
        }
    }
}
