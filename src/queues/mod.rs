//! Queues — named message channels on the Messaging service
//!
//! Wraps the `/v2/queues` family of endpoints: create (PUT), list, get,
//! JSON-patch update, delete, statistics, pre-signed sharing, and purge.

mod requests;
mod results;

pub use requests::{
    create, delete, get, list, purge, share, stats, update, CreateOpts, ListOpts, PatchKind,
    PatchOp, PurgeOpts, ShareOpts,
};
pub use results::{Queue, QueueDetails, QueueShare, Stats};
