//! Message operations

use serde::Serialize;

use super::results::{Message, ResourceList};
use crate::client::{RequestOpts, ServiceClient};
use crate::encode::{self, QueryBuilder, ToQueryString};
use crate::error::Result;
use crate::pagination::Pager;
use crate::types::{ClientId, JsonValue};

const API_VERSION: &str = "v2";
const API_NAME: &str = "queues";

// ============================================================================
// Options
// ============================================================================

/// One message in a batch post.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOpts {
    /// Application payload. Required.
    pub body: JsonValue,

    /// Time to live, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,

    /// Seconds to withhold the message from claims and listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
}

/// Parameters for listing messages.
#[derive(Debug, Clone, Default)]
pub struct ListOpts {
    /// Cap on the number of messages per page
    pub limit: Option<u32>,
    /// Message id to start listing after
    pub marker: Option<String>,
    /// Include messages posted by this client
    pub echo: bool,
    /// Include messages currently under claim
    pub include_claimed: bool,
    /// Include messages still within their delay
    pub include_delayed: bool,
}

impl ToQueryString for ListOpts {
    fn to_query_string(&self) -> Result<String> {
        Ok(QueryBuilder::new()
            .opt_param("limit", &self.limit)
            .opt_param("marker", &self.marker)
            .flag("echo", self.echo)
            .flag("include_claimed", self.include_claimed)
            .flag("include_delayed", self.include_delayed)
            .build())
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Post a batch of messages to a queue.
///
/// The batch must not be empty and every message needs a payload; both
/// rules fail validation before any HTTP call.
pub async fn create(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    batch: &[CreateOpts],
) -> Result<ResourceList> {
    if batch.is_empty() {
        return Err(crate::error::Error::validation("messages"));
    }
    for message in batch {
        encode::require_value("body", &message.body)?;
    }

    let body = encode::wrap("messages", encode::to_body(&batch)?);
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "messages"])?;
    let response = client
        .post(url, &body, &RequestOpts::new(&[201]).client_id(client_id))
        .await?;
    response.extract()
}

/// List messages on a queue, lazily, one page at a time.
pub fn list<'a>(
    client: &'a ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    opts: &ListOpts,
) -> Result<Pager<'a, Message>> {
    let mut url = client.service_url(&[API_VERSION, API_NAME, queue_name, "messages"])?;
    encode::append_query(&mut url, &opts.to_query_string()?);
    Ok(Pager::new(client, url).header(crate::client::CLIENT_ID_HEADER, client_id.as_str()))
}

/// Fetch a single message.
pub async fn get(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    message_id: &str,
) -> Result<Message> {
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "messages", message_id])?;
    let response = client
        .get(url, &RequestOpts::new(&[200]).client_id(client_id))
        .await?;
    response.extract()
}

/// Delete a single message.
pub async fn delete(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    message_id: &str,
) -> Result<()> {
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "messages", message_id])?;
    client
        .delete(url, &RequestOpts::new(&[204]).client_id(client_id))
        .await?;
    Ok(())
}

/// Delete all messages on a queue.
pub async fn delete_all(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
) -> Result<()> {
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "messages"])?;
    client
        .delete(url, &RequestOpts::new(&[204]).client_id(client_id))
        .await?;
    Ok(())
}
