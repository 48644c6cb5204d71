//! Typed flavor responses

use serde::Deserialize;

use crate::pagination::Listable;

/// A storage capability profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Flavor {
    /// Location of the flavor resource
    #[serde(default)]
    pub href: String,
    /// Pool group backing this flavor
    #[serde(default)]
    pub pool_group: String,
    /// Flavor name
    #[serde(default)]
    pub name: String,
    /// Capabilities advertised by the backing pools, e.g. `FIFO`
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl Listable for Flavor {
    const COLLECTION_KEY: &'static str = "flavors";
}
