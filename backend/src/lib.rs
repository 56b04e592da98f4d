//! Demonstration REST API serving an in-memory user directory.
//!
//! Layout follows a hexagonal split: [`domain`] holds the record types and the
//! store port, [`outbound`] implements the port in memory, and [`inbound`]
//! exposes it over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use middleware::{RequestLog, TraceId};
