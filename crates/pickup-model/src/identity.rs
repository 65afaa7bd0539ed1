//! Identity snapshot used for authorization decisions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::Account;
use crate::role::Role;

/// A verified caller identity.
///
/// An `Identity` is always drawn from the *current* account record at the
/// moment of authentication, never from stale token claims: a token stays
/// structurally valid after the account changes, so the live record is the
/// only source of truth for role and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account identifier.
    pub id: Uuid,
    /// Account email.
    pub email: String,
    /// Current account role.
    pub role: Role,
}

impl Identity {
    /// Builds an identity snapshot from a live account record.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            role: account.role,
        }
    }

    /// Checks whether this identity owns the given resource id.
    ///
    /// Used to gate self-service operations independent of role.
    #[must_use]
    pub fn is_self(&self, target_id: Uuid) -> bool {
        self.id == target_id
    }
}
