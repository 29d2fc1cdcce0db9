//! Response DTOs for the front-end API
//!
//! The three user-facing routes answer with plain text built from an outcome
//! and the configured display name. Health, stats and errors answer with JSON.

use serde::Serialize;

use crate::store::StatsSnapshot;

/// Renders the landing page greeting for GET /
pub fn greeting(app_name: &str) -> String {
    format!("<p>Hello, World from {}!</p>", app_name)
}

/// Result of a conditional set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The key was absent and the value was written
    Stored,
    /// The key was already present; nothing was written
    AlreadyExists,
}

impl SetOutcome {
    /// Renders the response text for this outcome
    pub fn render(&self, app_name: &str, key: &str) -> String {
        match self {
            SetOutcome::Stored => format!("{}: stored in store", app_name),
            SetOutcome::AlreadyExists => format!("{}: {} already exists", app_name, key),
        }
    }
}

/// Result of a read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetOutcome {
    /// The stored value
    Found(String),
    /// No value under the key
    Missing,
}

impl GetOutcome {
    /// Renders the response text for this outcome
    pub fn render(&self, app_name: &str, key: &str) -> String {
        match self {
            GetOutcome::Found(value) => format!("{}: {}", app_name, value),
            GetOutcome::Missing => format!("{}: {} does not exist", app_name, key),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Conditional sets that wrote a value
    pub stored: u64,
    /// Conditional sets rejected because the key existed
    pub conflicts: u64,
    /// Reads that found a value
    pub hits: u64,
    /// Reads on a missing key
    pub misses: u64,
    /// Calls that failed because the store was unavailable
    pub store_errors: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Result of the most recent background health check
    pub store_available: bool,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a counters snapshot
    pub fn new(snapshot: StatsSnapshot, store_available: bool) -> Self {
        Self {
            stored: snapshot.stored,
            conflicts: snapshot.conflicts,
            hits: snapshot.hits,
            misses: snapshot.misses,
            store_errors: snapshot.store_errors,
            hit_rate: snapshot.hit_rate(),
            store_available,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Backend label, e.g. "redis"
    pub store: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// The store answered a ping
    pub fn healthy(store: impl Into<String>) -> Self {
        Self::with_status("healthy", store)
    }

    /// The store could not be reached
    pub fn degraded(store: impl Into<String>) -> Self {
        Self::with_status("degraded", store)
    }

    fn with_status(status: &str, store: impl Into<String>) -> Self {
        Self {
            status: status.to_string(),
            store: store.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting("web1"), "<p>Hello, World from web1!</p>");
    }

    #[test]
    fn test_set_outcome_render() {
        assert_eq!(SetOutcome::Stored.render("web1", "a"), "web1: stored in store");
        assert_eq!(
            SetOutcome::AlreadyExists.render("web1", "a"),
            "web1: a already exists"
        );
    }

    #[test]
    fn test_get_outcome_render() {
        assert_eq!(GetOutcome::Found("1".into()).render("web1", "a"), "web1: 1");
        assert_eq!(GetOutcome::Missing.render("web1", "a"), "web1: a does not exist");
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let snapshot = StatsSnapshot {
            hits: 80,
            misses: 20,
            ..Default::default()
        };
        let resp = StatsResponse::new(snapshot, true);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert!(resp.store_available);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy("memory");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("memory"));
        assert!(json.contains("timestamp"));

        assert_eq!(HealthResponse::degraded("redis").status, "degraded");
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
