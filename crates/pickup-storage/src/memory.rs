//! In-memory account store.
//!
//! Suitable for tests and single-process deployments. Atomicity of the
//! login-state update comes from performing the whole read-modify-write
//! under one write guard.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use pickup_model::Account;
use uuid::Uuid;

use crate::account::{AccountStore, LoginState, LoginStateTransition};
use crate::error::{StoreError, StoreResult};

/// Thread-safe in-memory [`AccountStore`].
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl MemoryAccountStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    /// Checks whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }

    /// Flips the active flag on an account.
    ///
    /// Deactivation support for admin flows and tests; the core never
    /// hard-deletes an account.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is absent.
    pub fn set_active(&self, id: Uuid, active: bool) -> StoreResult<()> {
        let mut accounts = self.accounts.write();
        let account = accounts.get_mut(&id).ok_or(StoreError::not_found(id))?;
        account.active = active;
        account.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        let accounts = self.accounts.read();
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Account>> {
        let accounts = self.accounts.read();
        Ok(accounts.get(&id).cloned())
    }

    async fn create(&self, account: &Account) -> StoreResult<Account> {
        let mut accounts = self.accounts.write();
        if accounts.values().any(|a| a.email == account.email) {
            return Err(StoreError::duplicate("email"));
        }
        accounts.insert(account.id, account.clone());
        Ok(account.clone())
    }

    async fn atomic_update_login_state(
        &self,
        id: Uuid,
        apply: &LoginStateTransition<'_>,
    ) -> StoreResult<Account> {
        let mut accounts = self.accounts.write();
        let account = accounts.get_mut(&id).ok_or(StoreError::not_found(id))?;
        // The transition sees the stored state, under the write guard.
        let next = apply(LoginState::of(account));
        account.failed_attempts = next.failed_attempts;
        account.lock_until = next.lock_until;
        account.last_login = next.last_login;
        account.updated_at = Utc::now();
        Ok(account.clone())
    }
}
