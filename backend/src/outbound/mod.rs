//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local stores; state is lost on restart.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no request handling.

pub mod memory;
