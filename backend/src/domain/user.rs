//! User data model.
//!
//! Records carry no validation beyond their shape: `name` and `email` are
//! free text, and the identifier is assigned by the store on creation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a path token cannot be read as a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("user id must be an integer: {source}")]
pub struct UserIdParseError {
    #[from]
    source: std::num::ParseIntError,
}

/// Store-assigned user identifier.
///
/// Identifiers handed out by the store are positive, but parsing accepts any
/// signed integer so lookups for `-1` report "not found" rather than a
/// malformed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<i64>()?))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored user record.
///
/// Serialises as `{"id":1,"name":"John Doe","email":"john@example.com"}`.
///
/// # Examples
/// ```
/// use demo_api::domain::{User, UserId};
///
/// let user = User::new(UserId::new(1), "John Doe", "john@example.com");
/// assert_eq!(user.id().get(), 1);
/// assert_eq!(user.name(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a user record from its parts.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name as supplied by the client.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email as supplied by the client.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Candidate record awaiting an identifier from the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Build a candidate from client-supplied fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach the store-assigned identifier, producing the stored record.
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        let Self { name, email } = self;
        User { id, name, email }
    }
}

/// Records present when the process starts.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(UserId::new(1), "John Doe", "john@example.com"),
        User::new(UserId::new(2), "Jane Smith", "jane@example.com"),
    ]
}

#[cfg(test)]
mod tests;
