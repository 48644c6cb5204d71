//! Service health operations
//!
//! `/v2/ping` answers quickly when the service is alive; `/v2/health`
//! returns a detailed document. Neither takes a Client-ID header.

use serde::Deserialize;

use crate::client::{RequestOpts, ServiceClient};
use crate::error::Result;
use crate::types::JsonObject;

const API_VERSION: &str = "v2";

/// Detailed health document for the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Health {
    /// Whether the service can reach the identity catalog
    #[serde(default)]
    pub catalog_reachable: bool,
    /// Whether the service can reach its message store
    #[serde(default)]
    pub storage_reachable: bool,
    /// Per-operation status details
    #[serde(default)]
    pub operation_status: JsonObject,
}

/// Basic liveness check. A healthy service answers with no body.
pub async fn ping(client: &ServiceClient) -> Result<()> {
    let url = client.service_url(&[API_VERSION, "ping"])?;
    client.get(url, &RequestOpts::new(&[200, 204])).await?;
    Ok(())
}

/// Fetch the detailed health document.
pub async fn health(client: &ServiceClient) -> Result<Health> {
    let url = client.service_url(&[API_VERSION, "health"])?;
    let response = client.get(url, &RequestOpts::new(&[200])).await?;
    response.extract()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::ServiceClient;

    #[tokio::test]
    async fn test_ping() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/ping"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = ServiceClient::new(server.uri()).unwrap();
        ping(&client).await.unwrap();
    }

    #[tokio::test]
    async fn test_ping_unhealthy() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/ping"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = ServiceClient::new(server.uri()).unwrap();
        let err = ping(&client).await.unwrap_err();
        assert_eq!(err.http_status(), Some(503));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "catalog_reachable": true,
                "storage_reachable": true,
                "operation_status": {"post_messages": {"succeeded": true}}
            })))
            .mount(&server)
            .await;

        let client = ServiceClient::new(server.uri()).unwrap();
        let status = health(&client).await.unwrap();

        assert!(status.catalog_reachable);
        assert!(status.storage_reachable);
        assert!(status.operation_status.contains_key("post_messages"));
    }

    #[tokio::test]
    async fn test_health_minimal_document() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/health"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"catalog_reachable": true})),
            )
            .mount(&server)
            .await;

        let client = ServiceClient::new(server.uri()).unwrap();
        let status = health(&client).await.unwrap();

        assert_eq!(
            status,
            Health {
                catalog_reachable: true,
                ..Health::default()
            }
        );
    }
}
