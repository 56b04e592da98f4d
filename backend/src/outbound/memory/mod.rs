//! In-memory adapters for the domain ports.
//!
//! State lives for the lifetime of the process and is lost on restart.

mod user_repository;

pub use user_repository::InMemoryUserRepository;
