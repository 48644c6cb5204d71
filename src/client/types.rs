//! Service client configuration and per-request options

use std::collections::HashMap;
use std::time::Duration;

use crate::types::ClientId;

/// Name of the client-identity header the Messaging API requires on most
/// operations.
pub const CLIENT_ID_HEADER: &str = "Client-ID";

/// Configuration for the service client
#[derive(Debug, Clone)]
pub struct ServiceClientConfig {
    /// Root endpoint of the Messaging service, e.g. `http://zaqar:8888`
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers sent on every request
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ServiceClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("zaqar-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ServiceClientConfig {
    /// Create a new config builder
    pub fn builder() -> ServiceClientConfigBuilder {
        ServiceClientConfigBuilder::default()
    }
}

/// Builder for the service client config
#[derive(Debug, Default)]
pub struct ServiceClientConfigBuilder {
    config: ServiceClientConfig,
}

impl ServiceClientConfigBuilder {
    /// Set the service endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ServiceClientConfig {
        self.config
    }
}

/// Options for a single request: the accepted status set and any extra
/// headers the operation carries.
#[derive(Debug, Clone, Default)]
pub struct RequestOpts {
    ok_codes: Vec<u16>,
    headers: Vec<(String, String)>,
    content_type: Option<String>,
}

impl RequestOpts {
    /// Create request options with an explicit accepted-status set
    pub fn new(ok_codes: &[u16]) -> Self {
        Self {
            ok_codes: ok_codes.to_vec(),
            headers: Vec::new(),
            content_type: None,
        }
    }

    /// Add a header to this request
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Carry the `Client-ID` header
    #[must_use]
    pub fn client_id(self, id: &ClientId) -> Self {
        self.header(CLIENT_ID_HEADER, id.as_str())
    }

    /// Override the request content type
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether a response status is inside the accepted set.
    ///
    /// An empty set accepts any 2xx status.
    pub fn accepts(&self, status: u16) -> bool {
        if self.ok_codes.is_empty() {
            (200..300).contains(&status)
        } else {
            self.ok_codes.contains(&status)
        }
    }

    /// Extra headers carried by this request
    pub fn extra_headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The content-type override, when set
    pub fn content_type_override(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}
