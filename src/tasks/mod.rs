//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Health monitor: pings the store and records whether it is reachable

mod health;

pub use health::spawn_health_monitor;
