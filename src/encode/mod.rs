//! Query-string and request-body encoding
//!
//! Options structs declare their wire shape with serde and implement one
//! of two narrow traits: [`ToQueryString`] for GET parameters,
//! [`ToRequestBody`] for JSON bodies. Required-field validation happens
//! inside those implementations, before any network I/O.

mod body;
mod query;

pub use body::{require_nonzero, require_str, require_value, to_body, wrap, ToRequestBody};
pub use query::{append_query, QueryBuilder, ToQueryString};
