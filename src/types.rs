//! Common types used throughout zaqar-client
//!
//! This module contains shared type definitions and type aliases used
//! across multiple modules.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Client-ID
// ============================================================================

/// The opaque per-caller token the Messaging API requires in the
/// `Client-ID` header on most operations.
///
/// The value is client-chosen and passed through unchecked; a missing or
/// malformed token is rejected by the server, never by this library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Create a client id from an existing token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Generate a fresh random client id
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ClientId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for ClientId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}
