//! Typed queue responses

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::pagination::Listable;
use crate::types::JsonObject;

/// A queue as it appears in listing responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Queue {
    /// Location of the queue resource
    #[serde(default)]
    pub href: String,
    /// Queue name
    #[serde(default)]
    pub name: String,
    /// HTTP methods allowed by a pre-signed URL
    #[serde(default)]
    pub methods: Vec<String>,
    /// Paths covered by a pre-signed URL
    #[serde(default)]
    pub paths: Vec<String>,
    /// Resource types covered by a pre-signed URL
    #[serde(default)]
    pub resource_types: Vec<String>,
    /// Queue metadata, present in detailed listings
    #[serde(default)]
    pub metadata: QueueDetails,
}

impl Listable for Queue {
    const COLLECTION_KEY: &'static str = "queues";
}

/// Queue metadata, as returned by get and update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueueDetails {
    /// Target queue for messages that exceed the claim limit
    #[serde(rename = "_dead_letter_queue", default)]
    pub dead_letter_queue: String,
    /// TTL applied to messages moved to the dead letter queue
    #[serde(rename = "_dead_letter_queue_messages_ttl", default)]
    pub dead_letter_queue_messages_ttl: i64,
    /// Delay applied to messages posted without one
    #[serde(rename = "_default_message_delay", default)]
    pub default_message_delay: i64,
    /// TTL applied to messages posted without one
    #[serde(rename = "_default_message_ttl", default)]
    pub default_message_ttl: i64,
    /// Maximum number of claims per message before dead-lettering
    #[serde(rename = "_max_claim_count", default)]
    pub max_claim_count: i64,
    /// Maximum size of a message post, in bytes
    #[serde(rename = "_max_messages_post_size", default)]
    pub max_messages_post_size: i64,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Storage flavor backing the queue
    #[serde(default)]
    pub flavor: String,
}

/// Message statistics for one queue, wrapped under `"messages"` on the
/// wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    /// Messages currently under claim
    #[serde(default)]
    pub claimed: i64,
    /// All messages in the queue
    #[serde(default)]
    pub total: i64,
    /// Messages available for claiming
    #[serde(default)]
    pub free: i64,
}

/// A pre-signed queue URL grant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueueShare {
    /// Project the grant was issued under
    #[serde(default)]
    pub project: String,
    /// Paths the grant covers
    #[serde(default)]
    pub paths: Vec<String>,
    /// Expiry timestamp
    #[serde(default)]
    pub expires: Option<NaiveDateTime>,
    /// HTTP methods the grant allows
    #[serde(default)]
    pub methods: Vec<String>,
    /// Server-computed signature
    #[serde(default)]
    pub signature: String,
    /// Grant options, when the server echoes them
    #[serde(default)]
    pub options: JsonObject,
}
