//! Request DTOs for the front-end API
//!
//! Defines the path parameters extracted from incoming routes.

use serde::Deserialize;

use crate::store::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};

/// Path parameters for GET /get/:key
#[derive(Debug, Clone, Deserialize)]
pub struct KeyPath {
    /// The store key
    pub key: String,
}

impl KeyPath {
    /// Validates the key
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Path parameters for GET /set/:key/:value
#[derive(Debug, Clone, Deserialize)]
pub struct SetPath {
    /// The store key
    pub key: String,
    /// The value to store, may be empty
    pub value: String,
}

impl SetPath {
    /// Validates the key and value
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(msg) = validate_key(&self.key) {
            return Some(msg);
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}
