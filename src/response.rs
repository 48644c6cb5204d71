//! Typed extraction from raw HTTP responses
//!
//! [`ApiResponse`] wraps one response whose status already passed the
//! operation's accepted set. Extraction separates "the server rejected
//! the request" (reported earlier, as [`Error::Status`]) from "the server
//! returned something we couldn't parse" ([`Error::Decode`]).

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::types::JsonValue;

/// One accepted HTTP response: status plus raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    bytes: Bytes,
}

impl ApiResponse {
    /// Wrap a raw response body
    pub fn new(status: StatusCode, bytes: Bytes) -> Self {
        Self { status, bytes }
    }

    /// The response status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw response body
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Whether the response carried no body (e.g. 204 No Content)
    pub fn is_empty(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }

    /// The body parsed as raw JSON
    pub fn json(&self) -> Result<JsonValue> {
        serde_json::from_slice(&self.bytes)
            .map_err(|e| Error::decode(format!("invalid JSON body: {e}")))
    }

    /// Decode the whole body into `T`.
    ///
    /// An empty body yields `T::default()`, not an error; delete-style
    /// 204 answers and create-style "nothing changed" answers decode to
    /// the zero value.
    pub fn extract<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.extract_opt()? {
            Some(value) => Ok(value),
            None => Ok(T::default()),
        }
    }

    /// Decode the whole body into `T`, or `None` when the body is empty.
    pub fn extract_opt<T>(&self) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        if self.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&self.bytes)
            .map(Some)
            .map_err(|e| Error::decode(format!("unexpected response shape: {e}")))
    }

    /// Decode the value under a wrapper key, e.g. the `"messages"` object
    /// in a stats response.
    ///
    /// An absent key yields `T::default()`; servers omit empty
    /// collections rather than sending `[]`.
    pub fn extract_at<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.is_empty() {
            return Ok(T::default());
        }
        let body = self.json()?;
        match body.get(key) {
            None | Some(JsonValue::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| Error::decode(format!("unexpected shape under {key:?}: {e}"))),
        }
    }
}
