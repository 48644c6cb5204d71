//! Error types for zaqar-client
//!
//! This module defines the error taxonomy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The taxonomy keeps "the server rejected the request" (`Status`) apart
//! from "the server returned something we couldn't parse" (`Decode`), and
//! both apart from failures that never reached the network (`Validation`,
//! `Encoding`).

use thiserror::Error;

/// The main error type for zaqar-client
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Pre-flight errors (raised before any network I/O)
    // ========================================================================
    /// A required option field was missing or zero-valued.
    #[error("Missing required field: {field}")]
    Validation {
        /// Wire name of the offending field
        field: String,
    },

    /// An options struct could not be serialized. Programmer error.
    #[error("Failed to encode request: {message}")]
    Encoding {
        /// What went wrong during serialization
        message: String,
    },

    /// An endpoint or next-page URL failed to parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ========================================================================
    // Network and protocol errors
    // ========================================================================
    /// Network-level failure, propagated unchanged from the transport.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response was received but its status code is not in the
    /// operation's accepted set.
    #[error("Unexpected HTTP status {status}: {body}")]
    Status {
        /// The status code the server answered with
        status: u16,
        /// The raw response body, kept for diagnostics
        body: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// What went wrong during decoding
        message: String,
    },
}

impl Error {
    /// Create a validation error naming the missing field
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Create a status error
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Check whether this error was raised before any HTTP call was made
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. } | Error::Encoding { .. } | Error::InvalidUrl(_)
        )
    }

    /// The HTTP status code, when the server answered outside the accepted set
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for zaqar-client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("_default_message_ttl");
        assert_eq!(
            err.to_string(),
            "Missing required field: _default_message_ttl"
        );

        let err = Error::status(404, "Not found");
        assert_eq!(err.to_string(), "Unexpected HTTP status 404: Not found");

        let err = Error::decode("expected array");
        assert_eq!(err.to_string(), "Failed to decode response: expected array");
    }

    #[test]
    fn test_is_preflight() {
        assert!(Error::validation("weight").is_preflight());
        assert!(Error::encoding("bad value").is_preflight());

        assert!(!Error::status(500, "").is_preflight());
        assert!(!Error::decode("truncated").is_preflight());
    }

    #[test]
    fn test_http_status() {
        assert_eq!(Error::status(409, "conflict").http_status(), Some(409));
        assert_eq!(Error::validation("uri").http_status(), None);
    }
}
