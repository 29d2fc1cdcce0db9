//! API Handlers
//!
//! HTTP request handlers for each front-end endpoint.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{HealthResponse, KeyPath, SetPath, StatsResponse};
use crate::proxy::KvProxy;
use crate::store::KeyValueStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Router & store adapter
    pub proxy: Arc<KvProxy>,
    /// Last result of the background health monitor
    pub store_available: Arc<AtomicBool>,
}

impl AppState {
    /// Creates a new AppState answering as `app_name` over `store`.
    pub fn new(app_name: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            proxy: Arc::new(KvProxy::new(app_name, store)),
            store_available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Creates a new AppState from configuration and an opened store.
    pub fn from_config(config: &Config, store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(config.app_name.clone(), store)
    }
}

/// Handler for GET /
pub async fn greet_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.proxy.greet())
}

/// Handler for GET /set/:key/:value
///
/// Stores the value only if the key does not exist yet.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(req): Path<SetPath>,
) -> Result<String> {
    if let Some(error_msg) = req.validate() {
        return Err(ProxyError::InvalidRequest(error_msg));
    }

    let outcome = state.proxy.conditional_set(&req.key, &req.value).await?;
    Ok(outcome.render(state.proxy.app_name(), &req.key))
}

/// Handler for GET /get/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(req): Path<KeyPath>,
) -> Result<String> {
    if let Some(error_msg) = req.validate() {
        return Err(ProxyError::InvalidRequest(error_msg));
    }

    let outcome = state.proxy.get(&req.key).await?;
    Ok(outcome.render(state.proxy.app_name(), &req.key))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.proxy.stats(),
        state.store_available.load(Ordering::Relaxed),
    ))
}

/// Handler for GET /health
///
/// Pings the store on every call; answers 503 when it cannot be reached.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store = state.proxy.store();
    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse::healthy(store.backend_name())),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::degraded(store.backend_name())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn test_state() -> AppState {
        AppState::new("web1", Arc::new(MemoryStore::new()))
    }

    fn set_path(key: &str, value: &str) -> Path<SetPath> {
        Path(SetPath {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    fn key_path(key: &str) -> Path<KeyPath> {
        Path(KeyPath {
            key: key.to_string(),
        })
    }

    #[tokio::test]
    async fn test_greet_handler() {
        let Html(body) = greet_handler(State(test_state())).await;
        assert_eq!(body, "<p>Hello, World from web1!</p>");
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state();

        let body = set_handler(State(state.clone()), set_path("test_key", "test_value"))
            .await
            .unwrap();
        assert_eq!(body, "web1: stored in store");

        let body = get_handler(State(state), key_path("test_key")).await.unwrap();
        assert_eq!(body, "web1: test_value");
    }

    #[tokio::test]
    async fn test_set_existing_key() {
        let state = test_state();

        set_handler(State(state.clone()), set_path("k", "v1"))
            .await
            .unwrap();
        let body = set_handler(State(state.clone()), set_path("k", "v2"))
            .await
            .unwrap();
        assert_eq!(body, "web1: k already exists");

        let body = get_handler(State(state), key_path("k")).await.unwrap();
        assert_eq!(body, "web1: v1");
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let body = get_handler(State(test_state()), key_path("nonexistent"))
            .await
            .unwrap();
        assert_eq!(body, "web1: nonexistent does not exist");
    }

    #[tokio::test]
    async fn test_set_invalid_request() {
        let result = set_handler(State(test_state()), set_path("", "value")).await;
        assert!(matches!(result, Err(ProxyError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();
        get_handler(State(state.clone()), key_path("nope"))
            .await
            .unwrap();

        let Json(response) = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 1);
        assert!(response.store_available);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let (status, Json(response)) = health_handler(State(test_state())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.status, "healthy");
        assert_eq!(response.store, "memory");
    }
}
