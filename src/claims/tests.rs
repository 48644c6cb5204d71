//! Tests for the claims module

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::client::ServiceClient;
use crate::types::ClientId;

const QUEUE_NAME: &str = "FakeTestQueue";
const CLAIM_ID: &str = "51db7067821e727dc24df754";

fn client_id() -> ClientId {
    ClientId::from("1234567890")
}

#[tokio::test]
async fn test_create() {
    let server = MockServer::start().await;

    let expected_body = json!({"ttl": 3600, "grace": 3600});

    Mock::given(method("POST"))
        .and(path("/v2/queues/FakeTestQueue/claims"))
        .and(header("Client-ID", "1234567890"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "messages": [
                {
                    "body": "BackupStarted",
                    "href": "/v2/queues/FakeTestQueue/messages/51db6f78c508f17ddc924357?claim_id=51db7067821e727dc24df754",
                    "age": 57,
                    "ttl": 300
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    let opts = CreateOpts {
        ttl: Some(3600),
        grace: Some(3600),
    };

    let claim = create(&client, &client_id(), QUEUE_NAME, &opts, &CreateQueryOpts::default())
        .await
        .unwrap()
        .expect("expected a claim");

    assert_eq!(claim.messages.len(), 1);
    assert_eq!(claim.messages[0].body, json!("BackupStarted"));
    assert_eq!(claim.messages[0].age, 57);
    assert_eq!(claim.messages[0].ttl, 300);
}

#[tokio::test]
async fn test_create_nothing_to_claim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/queues/FakeTestQueue/claims"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    let claim = create(
        &client,
        &client_id(),
        QUEUE_NAME,
        &CreateOpts::default(),
        &CreateQueryOpts::default(),
    )
    .await
    .unwrap();

    assert_eq!(claim, None);
}

#[tokio::test]
async fn test_create_with_limit() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/queues/FakeTestQueue/claims"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    let query = CreateQueryOpts { limit: Some(5) };
    let claim = create(&client, &client_id(), QUEUE_NAME, &CreateOpts::default(), &query)
        .await
        .unwrap();

    assert_eq!(claim, None);
}

#[tokio::test]
async fn test_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/queues/FakeTestQueue/claims/51db7067821e727dc24df754"))
        .and(header("Client-ID", "1234567890"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "age": 50,
            "href": "/v2/queues/demoqueue/claims/51db7067821e727dc24df754",
            "messages": [
                {
                    "body": "BackupStarted",
                    "href": "/v2/queues/FakeTestQueue/messages/51db6f78c508f17ddc924357?claim_id=51db7067821e727dc24df754",
                    "age": 57,
                    "ttl": 300
                }
            ],
            "ttl": 50
        })))
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    let claim = get(&client, &client_id(), QUEUE_NAME, CLAIM_ID).await.unwrap();

    assert_eq!(
        claim,
        Claim {
            age: 50,
            href: "/v2/queues/demoqueue/claims/51db7067821e727dc24df754".to_string(),
            messages: vec![ClaimedMessage {
                body: json!("BackupStarted"),
                age: 57,
                href: "/v2/queues/FakeTestQueue/messages/51db6f78c508f17ddc924357?claim_id=51db7067821e727dc24df754".to_string(),
                ttl: 300,
                ..ClaimedMessage::default()
            }],
            ttl: 50,
            ..Claim::default()
        }
    );
}

#[tokio::test]
async fn test_update() {
    let server = MockServer::start().await;

    let expected_body = json!({"ttl": 1200, "grace": 1600});

    Mock::given(method("PATCH"))
        .and(path("/v2/queues/FakeTestQueue/claims/51db7067821e727dc24df754"))
        .and(header("Client-ID", "1234567890"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    let opts = UpdateOpts {
        ttl: Some(1200),
        grace: Some(1600),
    };

    update(&client, &client_id(), QUEUE_NAME, CLAIM_ID, &opts)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/queues/FakeTestQueue/claims/51db7067821e727dc24df754"))
        .and(header("Client-ID", "1234567890"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = ServiceClient::new(server.uri()).unwrap();
    delete(&client, &client_id(), QUEUE_NAME, CLAIM_ID).await.unwrap();
}
