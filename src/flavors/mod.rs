//! Flavors — named storage capability profiles
//!
//! Admin-only surface wrapping `/v2/flavors`. A queue created with a
//! flavor lands on a pool from that flavor's group.

mod requests;
mod results;

pub use requests::{create, delete, get, list, update, CreateOpts, ListOpts, UpdateOpts};
pub use results::Flavor;
