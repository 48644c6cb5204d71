//! Queue operations

use chrono::NaiveDateTime;
use serde::Serialize;

use super::results::{Queue, QueueDetails, QueueShare, Stats};
use crate::client::{RequestOpts, ServiceClient};
use crate::encode::{self, QueryBuilder, ToQueryString, ToRequestBody};
use crate::error::Result;
use crate::pagination::Pager;
use crate::types::{ClientId, JsonValue};

const API_VERSION: &str = "v2";
const API_NAME: &str = "queues";

/// Content type for queue metadata updates (RFC 6902 patch, messaging
/// dialect).
const JSON_PATCH_CONTENT_TYPE: &str = "application/openstack-messaging-v2.0-json-patch";

// ============================================================================
// Options
// ============================================================================

/// Parameters for creating a queue.
///
/// `default_message_ttl` and `max_messages_post_size` are required; zero
/// means unset and fails validation before any HTTP call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOpts {
    /// TTL applied to messages posted without one. Required.
    #[serde(rename = "_default_message_ttl")]
    pub default_message_ttl: i64,

    /// Maximum size of a message post, in bytes. Required.
    #[serde(rename = "_max_messages_post_size")]
    pub max_messages_post_size: i64,

    /// Delay applied to messages posted without one
    #[serde(
        rename = "_default_message_delay",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_message_delay: Option<i64>,

    /// Target queue for messages that exceed the claim limit
    #[serde(rename = "_dead_letter_queue", skip_serializing_if = "Option::is_none")]
    pub dead_letter_queue: Option<String>,

    /// TTL applied to messages moved to the dead letter queue
    #[serde(
        rename = "_dead_letter_queue_messages_ttl",
        skip_serializing_if = "Option::is_none"
    )]
    pub dead_letter_queue_messages_ttl: Option<i64>,

    /// Maximum number of claims per message before dead-lettering
    #[serde(rename = "_max_claim_count", skip_serializing_if = "Option::is_none")]
    pub max_claim_count: Option<i64>,

    /// Storage flavor backing the queue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToRequestBody for CreateOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::require_nonzero("_default_message_ttl", self.default_message_ttl)?;
        encode::require_nonzero("_max_messages_post_size", self.max_messages_post_size)?;
        encode::to_body(self)
    }
}

/// Parameters for listing queues.
#[derive(Debug, Clone, Default)]
pub struct ListOpts {
    /// Cap on the number of queues per page
    pub limit: Option<u32>,
    /// Queue name to start listing after
    pub marker: Option<String>,
    /// Include queue metadata in the listing
    pub detailed: bool,
}

impl ToQueryString for ListOpts {
    fn to_query_string(&self) -> Result<String> {
        Ok(QueryBuilder::new()
            .opt_param("limit", &self.limit)
            .opt_param("marker", &self.marker)
            .flag("detailed", self.detailed)
            .build())
    }
}

/// Kind of a metadata patch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchKind {
    /// Add a metadata property
    Add,
    /// Replace a metadata property
    Replace,
    /// Remove a metadata property
    Remove,
}

/// One JSON-patch operation against queue metadata.
///
/// Paths address metadata properties, e.g. `/metadata/_max_claim_count`.
#[derive(Debug, Clone, Serialize)]
pub struct PatchOp {
    /// What to do
    pub op: PatchKind,
    /// Metadata property to touch
    pub path: String,
    /// New value; absent for remove operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
}

/// Parameters for pre-signing a queue URL.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShareOpts {
    /// Paths the grant covers, e.g. `messages`, `claims`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
    /// HTTP methods the grant allows
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    /// Expiry timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<NaiveDateTime>,
}

impl ToRequestBody for ShareOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::to_body(self)
    }
}

/// Parameters for purging queue contents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgeOpts {
    /// Which resources to drop: `messages`, `subscriptions`, or both
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_types: Vec<String>,
}

impl ToRequestBody for PurgeOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::to_body(self)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Request the creation of a new queue.
///
/// Zaqar creates queues with PUT; the server answers 201 on creation and
/// 204 when the queue already existed.
pub async fn create(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    opts: &CreateOpts,
) -> Result<()> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name])?;
    client
        .put(url, &body, &RequestOpts::new(&[201, 204]).client_id(client_id))
        .await?;
    Ok(())
}

/// List queues, lazily, one page at a time.
pub fn list<'a>(
    client: &'a ServiceClient,
    client_id: &ClientId,
    opts: &ListOpts,
) -> Result<Pager<'a, Queue>> {
    let mut url = client.service_url(&[API_VERSION, API_NAME])?;
    encode::append_query(&mut url, &opts.to_query_string()?);
    Ok(Pager::new(client, url).header(crate::client::CLIENT_ID_HEADER, client_id.as_str()))
}

/// Fetch a queue's metadata.
pub async fn get(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
) -> Result<QueueDetails> {
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name])?;
    let response = client
        .get(url, &RequestOpts::new(&[200]).client_id(client_id))
        .await?;
    response.extract()
}

/// Patch a queue's metadata.
///
/// Returns the resulting metadata when the server sends it back; a 204
/// answer yields the zero value.
pub async fn update(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    ops: &[PatchOp],
) -> Result<QueueDetails> {
    let body = encode::to_body(&ops)?;
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name])?;
    let response = client
        .patch(
            url,
            &body,
            &RequestOpts::new(&[200, 201, 204])
                .client_id(client_id)
                .content_type(JSON_PATCH_CONTENT_TYPE),
        )
        .await?;
    response.extract()
}

/// Delete a queue.
pub async fn delete(client: &ServiceClient, client_id: &ClientId, queue_name: &str) -> Result<()> {
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name])?;
    client
        .delete(url, &RequestOpts::new(&[204]).client_id(client_id))
        .await?;
    Ok(())
}

/// Fetch message statistics for a queue.
///
/// This endpoint does not take a Client-ID header.
pub async fn stats(client: &ServiceClient, queue_name: &str) -> Result<Stats> {
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "stats"])?;
    let response = client.get(url, &RequestOpts::new(&[200])).await?;
    response.extract_at("messages")
}

/// Pre-sign a queue URL for an external consumer.
pub async fn share(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    opts: &ShareOpts,
) -> Result<QueueShare> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "share"])?;
    let response = client
        .post(url, &body, &RequestOpts::new(&[200]).client_id(client_id))
        .await?;
    response.extract()
}

/// Drop a queue's messages and/or subscriptions without deleting the
/// queue itself.
pub async fn purge(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    opts: &PurgeOpts,
) -> Result<()> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "purge"])?;
    client
        .post(url, &body, &RequestOpts::new(&[204]).client_id(client_id))
        .await?;
    Ok(())
}
