//! Decoded listing pages

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::response::ApiResponse;

/// A relation link embedded in a listing response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link relation, e.g. `"next"`
    pub rel: String,
    /// Target of the link; usually root-relative
    pub href: String,
}

/// A resource that appears in paginated listings.
///
/// Implementations name the JSON key their collection is wrapped under in
/// a listing response (`"queues"`, `"messages"`, ...). The key is a
/// per-resource fixture; there is no unifying rule on the wire.
pub trait Listable: DeserializeOwned {
    /// The JSON key the collection is wrapped under
    const COLLECTION_KEY: &'static str;
}

/// One decoded page of a paginated listing.
///
/// Immutable once materialized; produced and owned by the [`Pager`] that
/// fetched it.
///
/// [`Pager`]: super::Pager
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    links: Vec<Link>,
    url: Url,
}

impl<T: Listable> Page<T> {
    /// Decode a page from an accepted listing response.
    ///
    /// An absent or null collection key decodes to an empty page; servers
    /// omit empty arrays. An empty body (204) is an empty page too.
    pub(crate) fn from_response(url: Url, response: &ApiResponse) -> Result<Self> {
        if response.is_empty() {
            return Ok(Self {
                items: Vec::new(),
                links: Vec::new(),
                url,
            });
        }

        let body = response.json()?;
        let items = match body.get(T::COLLECTION_KEY) {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                Error::decode(format!(
                    "unexpected shape under {:?}: {e}",
                    T::COLLECTION_KEY
                ))
            })?,
        };
        let links = match body.get("links") {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| Error::decode(format!("unexpected shape under \"links\": {e}")))?,
        };

        Ok(Self { items, links, url })
    }

    /// The decoded resources on this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, yielding its resources
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of resources on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no resources
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The URL this page was fetched from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The relation links embedded in the page body
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The href of the `next` link, when the server provided one
    pub fn next_href(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == "next")
            .map(|link| link.href.as_str())
    }
}
