//! Domain primitives and ports.
//!
//! Purpose: define the user record, the store port it flows through, and the
//! transport-agnostic error type. Nothing here depends on Actix.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — domain failure and its category.
//! - `User`, `UserId`, `NewUser` — stored record, its identifier, and a
//!   creation candidate.
//! - `ports::UserRepository` — append-only record store.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::user::{NewUser, User, UserId, UserIdParseError, seed_users};
