//! Request and Response models for the front-end API
//!
//! Path parameters coming in, text outcomes and JSON bodies going out.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{KeyPath, SetPath};
pub use responses::{
    greeting, ErrorResponse, GetOutcome, HealthResponse, SetOutcome, StatsResponse,
};
