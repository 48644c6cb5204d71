//! Subscriptions — per-queue notification targets
//!
//! Wraps `/v2/queues/{queue}/subscriptions`. Unlike most Messaging
//! endpoints, the original API consumes these without a Client-ID header;
//! that quirk is preserved here.

mod requests;
mod results;

pub use requests::{create, delete, get, list, update, CreateOpts, ListOpts, UpdateOpts};
pub use results::{Subscription, SubscriptionRef};
