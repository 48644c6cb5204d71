//! Subscription operations

use serde::Serialize;

use super::results::{Subscription, SubscriptionRef};
use crate::client::{RequestOpts, ServiceClient};
use crate::encode::{self, QueryBuilder, ToQueryString, ToRequestBody};
use crate::error::Result;
use crate::pagination::Pager;
use crate::types::{JsonObject, JsonValue};

const API_VERSION: &str = "v2";
const API_NAME: &str = "queues";

// ============================================================================
// Options
// ============================================================================

/// Parameters for listing subscriptions.
#[derive(Debug, Clone, Default)]
pub struct ListOpts {
    /// Cap on the number of subscriptions per page
    pub limit: Option<u32>,
    /// Subscription id to start listing after
    pub marker: Option<String>,
}

impl ToQueryString for ListOpts {
    fn to_query_string(&self) -> Result<String> {
        Ok(QueryBuilder::new()
            .opt_param("limit", &self.limit)
            .opt_param("marker", &self.marker)
            .build())
    }
}

/// Parameters for creating a subscription.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOpts {
    /// Notification target. Required.
    pub subscriber: String,

    /// Subscription lifetime, in seconds
    pub ttl: i64,

    /// Delivery options, e.g. webhook headers
    pub options: JsonObject,
}

impl ToRequestBody for CreateOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::require_str("subscriber", &self.subscriber)?;
        encode::to_body(self)
    }
}

/// Parameters for updating a subscription.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOpts {
    /// Notification target. Required.
    pub subscriber: String,

    /// New subscription lifetime, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,

    /// New delivery options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<JsonObject>,
}

impl ToRequestBody for UpdateOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::require_str("subscriber", &self.subscriber)?;
        encode::to_body(self)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// List a queue's subscriptions, lazily, one page at a time.
pub fn list<'a>(
    client: &'a ServiceClient,
    queue_name: &str,
    opts: &ListOpts,
) -> Result<Pager<'a, Subscription>> {
    let mut url = client.service_url(&[API_VERSION, API_NAME, queue_name, "subscriptions"])?;
    encode::append_query(&mut url, &opts.to_query_string()?);
    Ok(Pager::new(client, url))
}

/// Subscribe a notification target to a queue.
pub async fn create(
    client: &ServiceClient,
    queue_name: &str,
    opts: &CreateOpts,
) -> Result<SubscriptionRef> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "subscriptions"])?;
    let response = client.post(url, &body, &RequestOpts::new(&[201])).await?;
    response.extract()
}

/// Fetch a single subscription.
pub async fn get(
    client: &ServiceClient,
    queue_name: &str,
    subscription_id: &str,
) -> Result<Subscription> {
    let url = client.service_url(&[
        API_VERSION,
        API_NAME,
        queue_name,
        "subscriptions",
        subscription_id,
    ])?;
    let response = client.get(url, &RequestOpts::new(&[200])).await?;
    response.extract()
}

/// Update a subscription.
pub async fn update(
    client: &ServiceClient,
    queue_name: &str,
    subscription_id: &str,
    opts: &UpdateOpts,
) -> Result<()> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[
        API_VERSION,
        API_NAME,
        queue_name,
        "subscriptions",
        subscription_id,
    ])?;
    client.patch(url, &body, &RequestOpts::new(&[204])).await?;
    Ok(())
}

/// Remove a subscription.
pub async fn delete(
    client: &ServiceClient,
    queue_name: &str,
    subscription_id: &str,
) -> Result<()> {
    let url = client.service_url(&[
        API_VERSION,
        API_NAME,
        queue_name,
        "subscriptions",
        subscription_id,
    ])?;
    client.delete(url, &RequestOpts::new(&[204])).await?;
    Ok(())
}
