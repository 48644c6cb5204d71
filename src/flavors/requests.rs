//! Flavor operations

use serde::Serialize;

use super::results::Flavor;
use crate::client::{RequestOpts, ServiceClient};
use crate::encode::{self, QueryBuilder, ToQueryString, ToRequestBody};
use crate::error::Result;
use crate::pagination::Pager;
use crate::types::{ClientId, JsonValue};

const API_VERSION: &str = "v2";
const API_NAME: &str = "flavors";

// ============================================================================
// Options
// ============================================================================

/// Parameters for registering a flavor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOpts {
    /// Pool group the flavor draws from. Required.
    pub pool_group: String,
}

impl ToRequestBody for CreateOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::require_str("pool_group", &self.pool_group)?;
        encode::to_body(self)
    }
}

/// Parameters for listing flavors.
#[derive(Debug, Clone, Default)]
pub struct ListOpts {
    /// Cap on the number of flavors per page
    pub limit: Option<u32>,
    /// Include capabilities in the listing
    pub detailed: bool,
    /// Flavor name to start listing after
    pub marker: Option<String>,
}

impl ToQueryString for ListOpts {
    fn to_query_string(&self) -> Result<String> {
        Ok(QueryBuilder::new()
            .opt_param("limit", &self.limit)
            .flag("detailed", self.detailed)
            .opt_param("marker", &self.marker)
            .build())
    }
}

/// Parameters for updating a flavor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOpts {
    /// New pool group. Required.
    pub pool_group: String,
}

impl ToRequestBody for UpdateOpts {
    fn to_request_body(&self) -> Result<JsonValue> {
        encode::require_str("pool_group", &self.pool_group)?;
        encode::to_body(self)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Register a flavor.
///
/// Zaqar registers flavors with PUT against the flavor's own URL.
pub async fn create(
    client: &ServiceClient,
    client_id: &ClientId,
    flavor_name: &str,
    opts: &CreateOpts,
) -> Result<()> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[API_VERSION, API_NAME, flavor_name])?;
    client
        .put(url, &body, &RequestOpts::new(&[201]).client_id(client_id))
        .await?;
    Ok(())
}

/// List flavors, lazily, one page at a time.
pub fn list<'a>(
    client: &'a ServiceClient,
    client_id: &ClientId,
    opts: &ListOpts,
) -> Result<Pager<'a, Flavor>> {
    let mut url = client.service_url(&[API_VERSION, API_NAME])?;
    encode::append_query(&mut url, &opts.to_query_string()?);
    Ok(Pager::new(client, url).header(crate::client::CLIENT_ID_HEADER, client_id.as_str()))
}

/// Fetch a flavor.
pub async fn get(
    client: &ServiceClient,
    client_id: &ClientId,
    flavor_name: &str,
) -> Result<Flavor> {
    let url = client.service_url(&[API_VERSION, API_NAME, flavor_name])?;
    let response = client
        .get(url, &RequestOpts::new(&[200]).client_id(client_id))
        .await?;
    response.extract()
}

/// Repoint a flavor at a different pool group.
pub async fn update(
    client: &ServiceClient,
    client_id: &ClientId,
    flavor_name: &str,
    opts: &UpdateOpts,
) -> Result<Flavor> {
    let body = opts.to_request_body()?;
    let url = client.service_url(&[API_VERSION, API_NAME, flavor_name])?;
    let response = client
        .patch(url, &body, &RequestOpts::new(&[200]).client_id(client_id))
        .await?;
    response.extract()
}

/// Deregister a flavor.
pub async fn delete(
    client: &ServiceClient,
    client_id: &ClientId,
    flavor_name: &str,
) -> Result<()> {
    let url = client.service_url(&[API_VERSION, API_NAME, flavor_name])?;
    client
        .delete(url, &RequestOpts::new(&[204]).client_id(client_id))
        .await?;
    Ok(())
}
