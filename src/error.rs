//! Error types for the front-end server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Proxy Error Enum ==
/// Unified error type for the front-end server.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Backing store could not be reached or answered with a failure
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<redis::RedisError> for ProxyError {
    /// Every store failure maps to one category; the redis error kind is kept
    /// in the message so connectivity loss and server replies stay apart in logs.
    fn from(err: redis::RedisError) -> Self {
        let cause = if err.is_connection_refusal()
            || err.is_connection_dropped()
            || err.is_timeout()
            || err.is_io_error()
        {
            "connection"
        } else {
            "reply"
        };
        ProxyError::StoreUnavailable(format!("{} ({:?} {})", err, err.kind(), cause))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the front-end server.
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_unavailable_maps_to_503() {
        let response = ProxyError::StoreUnavailable("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = ProxyError::InvalidRequest("Key cannot be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_redis_error_is_store_unavailable() {
        let err: ProxyError =
            redis::RedisError::from((redis::ErrorKind::IoError, "connection reset")).into();
        match err {
            ProxyError::StoreUnavailable(msg) => {
                assert!(msg.contains("IoError"));
                assert!(msg.contains("connection"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_redis_reply_error_keeps_kind() {
        let err: ProxyError = redis::RedisError::from((
            redis::ErrorKind::TypeError,
            "WRONGTYPE Operation against a key holding the wrong kind of value",
        ))
        .into();
        match err {
            ProxyError::StoreUnavailable(msg) => {
                assert!(msg.contains("TypeError"));
                assert!(msg.contains("reply"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
