//! Typed claim responses

use serde::Deserialize;

use crate::types::JsonValue;

/// A lease over a batch of messages.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Claim {
    /// Seconds since the claim was created
    #[serde(default)]
    pub age: i64,
    /// Location of the claim resource
    #[serde(default)]
    pub href: String,
    /// The messages covered by this claim
    #[serde(default)]
    pub messages: Vec<ClaimedMessage>,
    /// Remaining lease time, in seconds
    #[serde(default)]
    pub ttl: i64,
    /// Grace period added to the claimed messages' lifetime
    #[serde(default)]
    pub grace: i64,
}

/// One message under a claim.
///
/// The href carries the `claim_id` query parameter needed to delete the
/// message while the claim is held.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClaimedMessage {
    /// Application payload
    #[serde(default)]
    pub body: JsonValue,
    /// Seconds since the message was posted
    #[serde(default)]
    pub age: i64,
    /// Location of the message resource, claim id included
    #[serde(default)]
    pub href: String,
    /// Remaining time to live, in seconds
    #[serde(default)]
    pub ttl: i64,
    /// Server-assigned message id
    #[serde(default)]
    pub id: String,
}
