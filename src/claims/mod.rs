//! Claims — time-bounded exclusive leases on batches of messages
//!
//! Wraps `/v2/queues/{queue}/claims`: claim creation, inspection, lease
//! renewal, and release.

mod requests;
mod results;

pub use requests::{create, delete, get, update, CreateOpts, CreateQueryOpts, UpdateOpts};
pub use results::{Claim, ClaimedMessage};

#[cfg(test)]
mod tests;
