//! HTTP service client
//!
//! A thin, verb-oriented wrapper over `reqwest` that every resource module
//! calls through. It knows three things: how to join paths onto the
//! service endpoint, which headers to send, and which status codes an
//! operation accepts. Anything else (retry, auth, rate limiting) is the
//! caller's business.

mod service;
mod types;

pub use service::ServiceClient;
pub use types::{RequestOpts, ServiceClientConfig, ServiceClientConfigBuilder, CLIENT_ID_HEADER};

#[cfg(test)]
mod tests;
