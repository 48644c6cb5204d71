//! Typed message responses

use serde::Deserialize;

use crate::pagination::Listable;
use crate::types::JsonValue;

/// A message on a queue.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    /// Application payload
    #[serde(default)]
    pub body: JsonValue,
    /// Seconds since the message was posted
    #[serde(default)]
    pub age: i64,
    /// Location of the message resource
    #[serde(default)]
    pub href: String,
    /// Server-assigned message id
    #[serde(default)]
    pub id: String,
    /// Remaining time to live, in seconds
    #[serde(default)]
    pub ttl: i64,
    /// Delay before the message became visible
    #[serde(default)]
    pub delay: i64,
    /// Payload checksum, when the server computes one
    #[serde(default)]
    pub checksum: String,
}

impl Listable for Message {
    const COLLECTION_KEY: &'static str = "messages";
}

/// Locations of the messages accepted by a batch post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceList {
    /// One href per accepted message, in post order
    #[serde(default)]
    pub resources: Vec<String>,
}
