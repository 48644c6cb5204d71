//! Link-follow pagination
//!
//! Listing endpoints return one page of results plus a `links` array; the
//! entry with `rel == "next"` points at the following page. [`Pager`]
//! walks those links lazily: one GET at a time, in server order, nothing
//! prefetched and nothing buffered beyond the current page.
//!
//! # Overview
//!
//! ```rust,ignore
//! let pager = queues::list(&client, &client_id, &ListOpts::default())?;
//! pager
//!     .each_page(|page| {
//!         for queue in page.items() {
//!             println!("{}", queue.name);
//!         }
//!         Ok(true) // keep going
//!     })
//!     .await?;
//! ```

mod page;
mod pager;

pub use page::{Link, Listable, Page};
pub use pager::Pager;
