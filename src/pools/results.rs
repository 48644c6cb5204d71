//! Typed pool responses

use serde::Deserialize;

use crate::pagination::Listable;

/// A message-store backend registered with the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pool {
    /// Location of the pool resource
    #[serde(default)]
    pub href: String,
    /// Flavor group this pool belongs to
    #[serde(default)]
    pub group: String,
    /// Pool name
    #[serde(default)]
    pub name: String,
    /// Weight used when distributing new queues across pools
    #[serde(default)]
    pub weight: i64,
    /// Storage backend URI, e.g. `mongodb://host:27017`
    #[serde(default)]
    pub uri: String,
}

impl Listable for Pool {
    const COLLECTION_KEY: &'static str = "pools";
}
