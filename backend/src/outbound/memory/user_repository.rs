//! Process-local implementation of [`UserRepository`].

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserRepository, UserStoreError};
use crate::domain::{NewUser, User, UserId, seed_users};

/// Vector-backed user store guarded by a mutex.
///
/// The lock makes id assignment and append a single step, so concurrent
/// creations never hand out the same identifier.
///
/// # Examples
/// ```
/// use demo_api::domain::ports::UserRepository;
/// use demo_api::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryUserRepository::seeded();
/// let users = store.list().await.expect("list users");
/// assert_eq!(users.len(), 2);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a store holding the given records in order.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Create a store holding the two startup records.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserStoreError> {
        self.users.lock().map_err(|err| {
            error!(error = %err, "user store lock poisoned");
            UserStoreError::unavailable("lock poisoned")
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.lock()?.clone())
    }

    async fn append(&self, candidate: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.lock()?;
        let next = i64::try_from(users.len())
            .map_err(|_| UserStoreError::unavailable("user count exceeds id range"))?
            + 1;
        let user = candidate.with_id(UserId::new(next));
        users.push(user.clone());
        debug!(user_id = %user.id(), "user appended");
        Ok(user)
    }

    async fn find(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        Ok(self.lock()?.iter().find(|user| user.id() == id).cloned())
    }
}
