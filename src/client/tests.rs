//! Tests for the service client module

use super::*;
use crate::error::Error;
use crate::types::ClientId;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_config_default() {
    let config = ServiceClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("zaqar-client/"));
}

#[test]
fn test_config_builder() {
    let config = ServiceClientConfig::builder()
        .endpoint("http://zaqar.example.com:8888")
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.endpoint, "http://zaqar.example.com:8888");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_opts_accepts() {
    let opts = RequestOpts::new(&[201, 204]);
    assert!(opts.accepts(201));
    assert!(opts.accepts(204));
    assert!(!opts.accepts(200));

    // An empty set accepts any 2xx.
    let opts = RequestOpts::default();
    assert!(opts.accepts(200));
    assert!(opts.accepts(299));
    assert!(!opts.accepts(301));
    assert!(!opts.accepts(404));
}

#[test]
fn test_service_url_joins_segments() {
    let client = ServiceClient::new("http://zaqar.example.com:8888").unwrap();
    let url = client
        .service_url(&["v2", "queues", "demoqueue", "messages"])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://zaqar.example.com:8888/v2/queues/demoqueue/messages"
    );
}

#[test]
fn test_service_url_keeps_endpoint_path() {
    let client = ServiceClient::new("http://zaqar.example.com:8888/messaging").unwrap();
    let url = client.service_url(&["v2", "queues"]).unwrap();
    assert_eq!(
        url.as_str(),
        "http://zaqar.example.com:8888/messaging/v2/queues"
    );
}

#[test]
fn test_resolve_relative_href() {
    let client = ServiceClient::new("http://zaqar.example.com:8888").unwrap();
    let url = client.resolve("/v2/queues?marker=london").unwrap();
    assert_eq!(
        url.as_str(),
        "http://zaqar.example.com:8888/v2/queues?marker=london"
    );
}

#[test]
fn test_resolve_absolute_href() {
    let client = ServiceClient::new("http://zaqar.example.com:8888").unwrap();
    let url = client.resolve("http://other.example.com/v2/queues").unwrap();
    assert_eq!(url.as_str(), "http://other.example.com/v2/queues");
}

#[test]
fn test_invalid_endpoint() {
    let result = ServiceClient::new("not a url");
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn test_get_accepted_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/ping"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = ServiceClient::new(mock_server.uri()).unwrap();
    let url = client.service_url(&["v2", "ping"]).unwrap();
    let response = client.get(url, &RequestOpts::new(&[200, 204])).await.unwrap();

    assert_eq!(response.status().as_u16(), 204);
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_status_outside_accepted_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/queues/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Queue does not exist"))
        .mount(&mock_server)
        .await;

    let client = ServiceClient::new(mock_server.uri()).unwrap();
    let url = client.service_url(&["v2", "queues", "missing"]).unwrap();
    let err = client
        .get(url, &RequestOpts::new(&[200]))
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Queue does not exist");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_id_header_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/queues"))
        .and(header("Client-ID", "1234567890"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"queues": []})))
        .mount(&mock_server)
        .await;

    let client = ServiceClient::new(mock_server.uri()).unwrap();
    let client_id = ClientId::from("1234567890");
    let url = client.service_url(&["v2", "queues"]).unwrap();
    let response = client
        .get(url, &RequestOpts::new(&[200]).client_id(&client_id))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/health"))
        .and(header("X-Project-Id", "demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let config = ServiceClientConfig::builder()
        .endpoint(mock_server.uri())
        .header("X-Project-Id", "demo")
        .build();
    let client = ServiceClient::with_config(config).unwrap();
    let url = client.service_url(&["v2", "health"]).unwrap();

    client.get(url, &RequestOpts::new(&[200])).await.unwrap();
}

#[tokio::test]
async fn test_put_sends_json_body() {
    let mock_server = MockServer::start().await;

    let expected = serde_json::json!({"_default_message_ttl": 3600});
    Mock::given(method("PUT"))
        .and(path("/v2/queues/demoqueue"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let client = ServiceClient::new(mock_server.uri()).unwrap();
    let url = client.service_url(&["v2", "queues", "demoqueue"]).unwrap();
    client
        .put(url, &expected, &RequestOpts::new(&[201, 204]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_content_type_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v2/queues/demoqueue"))
        .and(header(
            "Content-Type",
            "application/openstack-messaging-v2.0-json-patch",
        ))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = ServiceClient::new(mock_server.uri()).unwrap();
    let url = client.service_url(&["v2", "queues", "demoqueue"]).unwrap();
    let body = serde_json::json!([{"op": "replace", "path": "/metadata/_max_claim_count", "value": 10}]);
    client
        .patch(
            url,
            &body,
            &RequestOpts::new(&[200, 201, 204])
                .content_type("application/openstack-messaging-v2.0-json-patch"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/queues/demoqueue"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = ServiceClient::new(mock_server.uri()).unwrap();
    let url = client.service_url(&["v2", "queues", "demoqueue"]).unwrap();
    let response = client.delete(url, &RequestOpts::new(&[204])).await.unwrap();

    assert!(response.is_empty());
}
