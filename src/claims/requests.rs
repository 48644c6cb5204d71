//! Claim operations

use serde::Serialize;

use super::results::Claim;
use crate::client::{RequestOpts, ServiceClient};
use crate::encode::{self, QueryBuilder, ToQueryString, ToRequestBody};
use crate::error::Result;
use crate::types::{ClientId, JsonValue};

const API_VERSION: &str = "v2";
const API_NAME: &str = "queues";

// ============================================================================
// Options
// ============================================================================

/// Parameters for creating a claim.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOpts {
    /// Lease time, in seconds. Expired claims release their messages for
    /// re-claiming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,

    /// Grace period: claimed messages live at least as long as the claim
    /// plus this many seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace: Option<i64>,
}

impl ToRequestBody for CreateOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::to_body(self)
    }
}

/// Query parameters for creating a claim.
#[derive(Debug, Clone, Default)]
pub struct CreateQueryOpts {
    /// Cap on the number of messages claimed
    pub limit: Option<u32>,
}

impl ToQueryString for CreateQueryOpts {
    fn to_query_string(&self) -> Result<String> {
        Ok(QueryBuilder::new().opt_param("limit", &self.limit).build())
    }
}

/// Parameters for renewing a claim.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOpts {
    /// New lease time, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,

    /// New grace period, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace: Option<i64>,
}

impl ToRequestBody for UpdateOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::to_body(self)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Claim a batch of messages on a queue.
///
/// Returns `None` when the queue had nothing to claim (the server
/// answers 204 without a body).
pub async fn create(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    opts: &CreateOpts,
    query: &CreateQueryOpts,
) -> Result<Option<Claim>> {
    let body = opts.to_request_body()?;
    let mut url = client.service_url(&[API_VERSION, API_NAME, queue_name, "claims"])?;
    encode::append_query(&mut url, &query.to_query_string()?);
    let response = client
        .post(url, &body, &RequestOpts::new(&[201, 204]).client_id(client_id))
        .await?;
    response.extract_opt()
}

/// Inspect a claim.
pub async fn get(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    claim_id: &str,
) -> Result<Claim> {
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "claims", claim_id])?;
    let response = client
        .get(url, &RequestOpts::new(&[200]).client_id(client_id))
        .await?;
    response.extract()
}

/// Renew a claim's lease.
pub async fn update(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    claim_id: &str,
    opts: &UpdateOpts,
) -> Result<()> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "claims", claim_id])?;
    client
        .patch(url, &body, &RequestOpts::new(&[204]).client_id(client_id))
        .await?;
    Ok(())
}

/// Release a claim, returning its messages to the queue.
pub async fn delete(
    client: &ServiceClient,
    client_id: &ClientId,
    queue_name: &str,
    claim_id: &str,
) -> Result<()> {
    let url = client.service_url(&[API_VERSION, API_NAME, queue_name, "claims", claim_id])?;
    client
        .delete(url, &RequestOpts::new(&[204]).client_id(client_id))
        .await?;
    Ok(())
}
