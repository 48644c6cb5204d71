//! Typed subscription responses

use serde::Deserialize;

use crate::pagination::Listable;
use crate::types::JsonObject;

/// A notification subscription on a queue.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Subscription {
    /// Notification target, e.g. an http/https/mailto URI
    #[serde(default)]
    pub subscriber: String,
    /// Remaining subscription lifetime, in seconds
    #[serde(default)]
    pub ttl: i64,
    /// Delivery options, e.g. webhook headers
    #[serde(default)]
    pub options: JsonObject,
    /// Seconds since the subscription was created
    #[serde(default)]
    pub age: i64,
    /// Server-assigned subscription id
    #[serde(default)]
    pub id: String,
    /// The queue this subscription watches
    #[serde(default)]
    pub source: String,
}

impl Listable for Subscription {
    const COLLECTION_KEY: &'static str = "subscriptions";
}

/// Reference to a newly created subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubscriptionRef {
    /// Server-assigned subscription id
    #[serde(default)]
    pub subscription_id: String,
}
