//! Request middleware.
//!
//! Purpose: log one access line per request and tag it with a trace id that
//! is echoed back to the caller.

pub mod request_log;

pub use request_log::{RequestLog, TRACE_ID_HEADER, TraceId};
