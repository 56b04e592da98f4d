//! Port abstraction for the user record store and its errors.
//!
//! The store is append-only: records are listed, appended with a
//! store-assigned identifier, or looked up by identifier. There is no update
//! or delete operation.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

/// Errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// The backing storage can no longer be accessed safely.
    #[error("user store unavailable: {message}")]
    Unavailable { message: String },
}

impl UserStoreError {
    /// Build an [`UserStoreError::Unavailable`] error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

impl From<UserStoreError> for Error {
    fn from(err: UserStoreError) -> Self {
        Self::internal(err.to_string())
    }
}

/// Ordered, append-only collection of user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every record in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    /// Assign `id = len + 1` to the candidate, store it, and return the
    /// stored record.
    async fn append(&self, candidate: NewUser) -> Result<User, UserStoreError>;

    /// Return the first record whose id matches, if any.
    async fn find(&self, id: UserId) -> Result<Option<User>, UserStoreError>;
}
