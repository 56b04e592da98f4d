//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a running server.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use demo_api::inbound::http::state::HttpState;
/// use demo_api::outbound::memory::InMemoryUserRepository;
///
/// let state = HttpState::new(Arc::new(InMemoryUserRepository::seeded()));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Record store shared by every worker.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state from the user store port.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
