//! kv_front - A small HTTP front-end over a Redis key-value store
//!
//! Exposes a greeting, a first-write-wins set and a get over a shared store handle.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod proxy;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use proxy::KvProxy;
pub use tasks::spawn_health_monitor;
