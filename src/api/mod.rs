//! API Module
//!
//! HTTP handlers and routing for the front-end.
//!
//! # Endpoints
//! - `GET /` - Greeting page
//! - `GET /set/:key/:value` - Store a value if the key is absent
//! - `GET /get/:key` - Read a value
//! - `GET /stats` - Outcome counters
//! - `GET /health` - Store health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
