//! # zaqar-client
//!
//! A typed Rust client for the OpenStack Messaging (Zaqar) v2 REST API.
//!
//! Each resource module maps one-to-one onto a Zaqar resource: it builds
//! request bodies and query strings, issues an HTTP call through the shared
//! [`ServiceClient`](client::ServiceClient), and decodes the JSON response
//! into typed result structs.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use zaqar_client::client::ServiceClient;
//! use zaqar_client::types::ClientId;
//! use zaqar_client::{messages, queues};
//!
//! #[tokio::main]
//! async fn main() -> zaqar_client::Result<()> {
//!     let client = ServiceClient::new("http://zaqar.example.com:8888")?;
//!     let client_id = ClientId::random();
//!
//!     // List queues, one page at a time.
//!     let pager = queues::list(&client, &client_id, &queues::ListOpts::default())?;
//!     pager
//!         .each_page(|page| {
//!             for queue in page.items() {
//!                 println!("{}", queue.name);
//!             }
//!             Ok(true)
//!         })
//!         .await?;
//!
//!     // Post a message.
//!     let batch = [messages::CreateOpts {
//!         body: serde_json::json!({"event": "BackupStarted"}),
//!         ttl: Some(300),
//!         delay: None,
//!     }];
//!     messages::create(&client, &client_id, "demoqueue", &batch).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │   Resource modules: queues · messages · claims ·             │
//! │   subscriptions · pools · flavors · health                   │
//! └──────────────────────────────────────────────────────────────┘
//!                │                │                 │
//! ┌──────────────┴──┬─────────────┴───┬─────────────┴────────────┐
//! │     encode      │   pagination    │     client / response    │
//! ├─────────────────┼─────────────────┼──────────────────────────┤
//! │ query strings   │ link-follow     │ verb methods             │
//! │ request bodies  │ page walker     │ accepted-status sets     │
//! │ validation      │ page stream     │ typed extraction         │
//! └─────────────────┴─────────────────┴──────────────────────────┘
//! ```
//!
//! No retry, no caching, no authentication: those belong to surrounding
//! collaborators. The client performs exactly one HTTP request per call.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// The shared HTTP service client
pub mod client;

/// Typed extraction from raw HTTP responses
pub mod response;

/// Query-string and request-body encoding
pub mod encode;

/// Link-follow pagination
pub mod pagination;

/// Queue operations
pub mod queues;

/// Message operations
pub mod messages;

/// Claim operations
pub mod claims;

/// Subscription operations
pub mod subscriptions;

/// Pool operations (admin)
pub mod pools;

/// Flavor operations (admin)
pub mod flavors;

/// Service health operations
pub mod health;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::ClientId;

pub use client::{RequestOpts, ServiceClient};
pub use pagination::{Link, Page, Pager};
pub use response::ApiResponse;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
