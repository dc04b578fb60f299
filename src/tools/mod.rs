//! MCP tool handlers.
//!
//! Each handler takes the shared [`DocStore`](crate::store::DocStore) plus a
//! deserialized request and returns formatted text for the client.

pub mod list_sets;
pub mod read;
pub mod search;
