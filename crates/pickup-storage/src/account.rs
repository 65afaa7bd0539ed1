//! Account store provider trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pickup_model::Account;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreResult;

/// Login-state fields updated atomically on every login attempt.
///
/// The failed-attempt counter, the lock window, and the last successful
/// login. [`AccountStore::atomic_update_login_state`] maps the stored
/// value through a [`LoginStateTransition`] as a single keyed
/// read-modify-write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    /// Consecutive failed login attempts.
    pub failed_attempts: u32,
    /// End of the lockout window, when locked.
    pub lock_until: Option<DateTime<Utc>>,
    /// Last successful login.
    pub last_login: Option<DateTime<Utc>>,
}

impl LoginState {
    /// Reads the current login state off an account record.
    #[must_use]
    pub const fn of(account: &Account) -> Self {
        Self {
            failed_attempts: account.failed_attempts,
            lock_until: account.lock_until,
            last_login: account.last_login,
        }
    }
}

/// Transition applied to the stored login state inside
/// [`AccountStore::atomic_update_login_state`].
///
/// The store invokes it with the state it currently holds, under its own
/// concurrency control, and persists the returned value. Callers must not
/// bake a previously fetched snapshot into the closure; derive the next
/// state from the argument so concurrent updates compose.
pub type LoginStateTransition<'a> = dyn Fn(LoginState) -> LoginState + Send + Sync + 'a;

/// Provider for account persistence.
///
/// Implementations must be thread-safe and support concurrent access. The
/// core holds an account record only for the duration of a single
/// operation; all durable state lives behind this trait.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Finds an account by normalized (lower-cased) email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Account>>;

    /// Finds an account by id.
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Account>>;

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Duplicate` if an account with the same email
    /// already exists.
    async fn create(&self, account: &Account) -> StoreResult<Account>;

    /// Applies a login-state transition as a single atomic operation keyed
    /// by account id, and returns the updated record.
    ///
    /// The transition runs against the state the store holds at update
    /// time, not against whatever the caller last read, so concurrent
    /// attempts against one account never lose counter increments.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent.
    async fn atomic_update_login_state(
        &self,
        id: Uuid,
        apply: &LoginStateTransition<'_>,
    ) -> StoreResult<Account>;
}
