//! Pools — storage backends registered with the Messaging service
//!
//! Admin-only surface wrapping `/v2/pools`.

mod requests;
mod results;

pub use requests::{create, delete, get, list, update, CreateOpts, ListOpts, UpdateOpts};
pub use results::Pool;
