//! Pool operations

use serde::Serialize;

use super::results::Pool;
use crate::client::{RequestOpts, ServiceClient};
use crate::encode::{self, QueryBuilder, ToQueryString, ToRequestBody};
use crate::error::Result;
use crate::pagination::Pager;
use crate::types::{ClientId, JsonObject, JsonValue};

const API_VERSION: &str = "v2";
const API_NAME: &str = "pools";

// ============================================================================
// Options
// ============================================================================

/// Parameters for registering a pool.
///
/// `weight` and `uri` are required; a zero weight or empty URI fails
/// validation before any HTTP call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOpts {
    /// Weight used when distributing new queues across pools. Required.
    pub weight: i64,

    /// Storage backend URI. Required.
    pub uri: String,

    /// Flavor group to register the pool under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Backend-specific options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<JsonObject>,
}

impl ToRequestBody for CreateOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::require_nonzero("weight", self.weight)?;
        encode::require_str("uri", &self.uri)?;
        encode::to_body(self)
    }
}

/// Parameters for listing pools.
#[derive(Debug, Clone, Default)]
pub struct ListOpts {
    /// Include backend options in the listing
    pub detailed: bool,
    /// Pool name to start listing after
    pub marker: Option<String>,
}

impl ToQueryString for ListOpts {
    fn to_query_string(&self) -> Result<String> {
        Ok(QueryBuilder::new()
            .flag("detailed", self.detailed)
            .opt_param("marker", &self.marker)
            .build())
    }
}

/// Parameters for updating a pool.
///
/// The service replaces the whole registration, so `weight` and `uri`
/// stay required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOpts {
    /// New weight. Required.
    pub weight: i64,

    /// New storage backend URI. Required.
    pub uri: String,

    /// New flavor group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// New backend-specific options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<JsonObject>,
}

impl ToRequestBody for UpdateOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::require_nonzero("weight", self.weight)?;
        encode::require_str("uri", &self.uri)?;
        encode::to_body(self)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Register a pool.
///
/// Zaqar registers pools with PUT against the pool's own URL.
pub async fn create(
    client: &ServiceClient,
    client_id: &ClientId,
    pool_name: &str,
    opts: &CreateOpts,
) -> Result<()> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[API_VERSION, API_NAME, pool_name])?;
    client
        .put(url, &body, &RequestOpts::new(&[201]).client_id(client_id))
        .await?;
    Ok(())
}

/// List pools, lazily, one page at a time.
pub fn list<'a>(
    client: &'a ServiceClient,
    client_id: &ClientId,
    opts: &ListOpts,
) -> Result<Pager<'a, Pool>> {
    let mut url = client.service_url(&[API_VERSION, API_NAME])?;
    encode::append_query(&mut url, &opts.to_query_string()?);
    Ok(Pager::new(client, url).header(crate::client::CLIENT_ID_HEADER, client_id.as_str()))
}

/// Fetch a pool's registration.
pub async fn get(client: &ServiceClient, client_id: &ClientId, pool_name: &str) -> Result<Pool> {
    let url = client.service_url(&[API_VERSION, API_NAME, pool_name])?;
    let response = client
        .get(url, &RequestOpts::new(&[200]).client_id(client_id))
        .await?;
    response.extract()
}

/// Replace a pool's registration.
pub async fn update(
    client: &ServiceClient,
    client_id: &ClientId,
    pool_name: &str,
    opts: &UpdateOpts,
) -> Result<Pool> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[API_VERSION, API_NAME, pool_name])?;
    let response = client
        .patch(url, &body, &RequestOpts::new(&[200]).client_id(client_id))
        .await?;
    response.extract()
}

/// Deregister a pool.
pub async fn delete(client: &ServiceClient, client_id: &ClientId, pool_name: &str) -> Result<()> {
    let url = client.service_url(&[API_VERSION, API_NAME, pool_name])?;
    client
        .delete(url, &RequestOpts::new(&[204]).client_id(client_id))
        .await?;
    Ok(())
}
