//! Canonical query-string construction

use url::form_urlencoded;
use url::Url;

use crate::error::Result;

/// A type that can render itself as a URL query string.
///
/// The output is either empty (every field at its default) or a canonical
/// `?key=value&key2=value2` string ready to append to a collection URL.
pub trait ToQueryString {
    /// Render the query string, validating fields first
    fn to_query_string(&self) -> Result<String>;
}

/// Collects query parameters in insertion order and renders them.
///
/// Parameters at their zero value are omitted: `None` options, `false`
/// flags, empty lists. Multi-valued parameters are comma-joined.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter unconditionally
    #[must_use]
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter when the value is set
    #[must_use]
    pub fn opt_param<T: ToString>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(v) => self.param(key, v.to_string()),
            None => self,
        }
    }

    /// Add a boolean flag, omitted when false
    #[must_use]
    pub fn flag(self, key: &str, value: bool) -> Self {
        if value {
            self.param(key, true)
        } else {
            self
        }
    }

    /// Add a comma-joined list parameter, omitted when empty
    #[must_use]
    pub fn list_param(self, key: &str, values: &[String]) -> Self {
        if values.is_empty() {
            self
        } else {
            self.param(key, values.join(","))
        }
    }

    /// Render the collected parameters.
    ///
    /// Returns `""` when nothing was added, otherwise a percent-encoded
    /// `?k=v&k2=v2` string.
    pub fn build(self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        format!("?{}", serializer.finish())
    }
}

/// Append a rendered query string (as produced by [`QueryBuilder::build`])
/// to a URL. An empty string leaves the URL untouched.
pub fn append_query(url: &mut Url, query: &str) {
    if let Some(stripped) = query.strip_prefix('?') {
        if !stripped.is_empty() {
            url.set_query(Some(stripped));
        }
    }
}
