//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod router;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;
