//! Messages — payloads posted to a queue
//!
//! Wraps `/v2/queues/{queue}/messages`: batch post, list, single-message
//! get and delete, and collection delete.

mod requests;
mod results;

pub use requests::{create, delete, delete_all, get, list, CreateOpts, ListOpts};
pub use results::{Message, ResourceList};
