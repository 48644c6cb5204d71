//! The shared service client

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

use super::types::{RequestOpts, ServiceClientConfig};
use crate::error::{Error, Result};
use crate::response::ApiResponse;
use crate::types::JsonValue;

/// HTTP client bound to one Messaging service endpoint.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted
/// and safe for concurrent use. The client performs exactly one HTTP
/// request per call and never retries.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    endpoint: Url,
    config: ServiceClientConfig,
}

impl ServiceClient {
    /// Create a client for the given endpoint with default configuration
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_config(ServiceClientConfig {
            endpoint: endpoint.into(),
            ..ServiceClientConfig::default()
        })
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ServiceClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            config,
        })
    }

    /// The service endpoint this client is bound to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Join path segments onto the service endpoint.
    pub fn service_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.endpoint.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::encoding("endpoint URL cannot be a base"))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Resolve a link href against the service endpoint.
    ///
    /// Listing responses carry root-relative next links
    /// (`/v2/queues?marker=...`); absolute hrefs pass through unchanged.
    pub fn resolve(&self, href: &str) -> Result<Url> {
        match Url::parse(href) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(self.endpoint.join(href)?),
            Err(e) => Err(e.into()),
        }
    }

    /// Make a GET request
    pub async fn get(&self, url: Url, opts: &RequestOpts) -> Result<ApiResponse> {
        self.request(Method::GET, url, None, opts).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, url: Url, body: &JsonValue, opts: &RequestOpts) -> Result<ApiResponse> {
        self.request(Method::POST, url, Some(body), opts).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put(&self, url: Url, body: &JsonValue, opts: &RequestOpts) -> Result<ApiResponse> {
        self.request(Method::PUT, url, Some(body), opts).await
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch(
        &self,
        url: Url,
        body: &JsonValue,
        opts: &RequestOpts,
    ) -> Result<ApiResponse> {
        self.request(Method::PATCH, url, Some(body), opts).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: Url, opts: &RequestOpts) -> Result<ApiResponse> {
        self.request(Method::DELETE, url, None, opts).await
    }

    /// Make a generic request.
    ///
    /// The response status is checked against the accepted set in `opts`
    /// before the body is handed back; anything outside it becomes
    /// [`Error::Status`] carrying the raw body for diagnostics.
    pub async fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<&JsonValue>,
        opts: &RequestOpts,
    ) -> Result<ApiResponse> {
        let mut req = self.http.request(method.clone(), url.clone());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        for (key, value) in opts.extra_headers() {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = body {
            let bytes =
                serde_json::to_vec(body).map_err(|e| Error::encoding(e.to_string()))?;
            let content_type = opts.content_type_override().unwrap_or("application/json");
            req = req.header(CONTENT_TYPE, content_type).body(bytes);
        }

        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !opts.accepts(status.as_u16()) {
            return Err(Error::status(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        debug!("{} {} -> {}", method, url, status.as_u16());
        Ok(ApiResponse::new(status, bytes))
    }
}
