//! Access gate: token verification plus live-account authorization.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pickup_model::{Identity, Role};
use pickup_storage::AccountStore;
use pickup_token::TokenService;
use uuid::Uuid;

use crate::error::{GateError, GateResult};

/// Extracts the token from an `Authorization` header value.
///
/// Accepts the `Bearer <token>` scheme; anything else yields `None`.
#[must_use]
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    (scheme == "Bearer" && !token.is_empty()).then_some(token)
}

/// Maps verified tokens and required roles to allow/deny decisions.
///
/// Depends only on the token service and the account store. Verification
/// itself is pure; the store round-trip exists because a token cannot be
/// revoked and therefore must never be the last word on account status or
/// role.
pub struct AccessGate {
    tokens: TokenService,
    store: Arc<dyn AccountStore>,
}

impl AccessGate {
    /// Creates a new access gate.
    #[must_use]
    pub fn new(tokens: TokenService, store: Arc<dyn AccountStore>) -> Self {
        Self { tokens, store }
    }

    /// Verifies a raw token and resolves it to a live identity.
    ///
    /// The identity snapshot is drawn from the *current* account record,
    /// not from the token's claims: a stale role in the token never wins.
    ///
    /// # Errors
    ///
    /// Returns `GateError::Token` on signature or expiry failure,
    /// `GateError::UnknownSubject` if the subject no longer resolves,
    /// `GateError::AccountInactive` for deactivated accounts, and
    /// propagates store faults unmodified.
    pub async fn authenticate(
        &self,
        raw_token: &str,
        now: DateTime<Utc>,
    ) -> GateResult<Identity> {
        let claims = self.tokens.verify(raw_token, now)?;

        let Some(account) = self.store.find_by_id(claims.sub).await? else {
            tracing::warn!(subject = %claims.sub, "token subject no longer exists");
            return Err(GateError::UnknownSubject);
        };

        if !account.active {
            tracing::warn!(account_id = %account.id, "token presented for inactive account");
            return Err(GateError::AccountInactive);
        }

        Ok(Identity::from_account(&account))
    }

    /// Like [`AccessGate::authenticate`], but a missing or invalid token
    /// yields `None` instead of an error.
    ///
    /// For endpoints that behave differently for anonymous and identified
    /// callers. Store faults still propagate; only authentication
    /// failures are absorbed.
    ///
    /// # Errors
    ///
    /// Returns only `GateError::Store`.
    pub async fn optional_authenticate(
        &self,
        raw_token: Option<&str>,
        now: DateTime<Utc>,
    ) -> GateResult<Option<Identity>> {
        let Some(token) = raw_token else {
            return Ok(None);
        };

        match self.authenticate(token, now).await {
            Ok(identity) => Ok(Some(identity)),
            Err(GateError::Store(e)) => Err(GateError::Store(e)),
            Err(_) => Ok(None),
        }
    }

    /// Requires that an identity is present.
    ///
    /// Absence is its own failure, distinct from any role mismatch.
    ///
    /// # Errors
    ///
    /// Returns `GateError::Unauthenticated` when no identity was
    /// established.
    pub fn require_identity<'a>(
        &self,
        identity: Option<&'a Identity>,
    ) -> GateResult<&'a Identity> {
        identity.ok_or(GateError::Unauthenticated)
    }

    /// Checks that the identity's current role is in the required set.
    ///
    /// `required` must be non-empty; an empty set denies everything
    /// rather than silently allowing.
    ///
    /// # Errors
    ///
    /// Returns `GateError::NotAuthorized` on a role mismatch.
    pub fn authorize(&self, identity: &Identity, required: &[Role]) -> GateResult<()> {
        if required.contains(&identity.role) {
            return Ok(());
        }

        tracing::warn!(
            account_id = %identity.id,
            role = %identity.role,
            "unauthorized access attempt"
        );
        Err(GateError::NotAuthorized)
    }

    /// Checks whether the identity owns the target resource.
    ///
    /// Ownership is independent of role; admin overrides are the
    /// caller's composition of [`AccessGate::authorize`] and this check.
    #[must_use]
    pub fn is_self(&self, identity: &Identity, target_id: Uuid) -> bool {
        identity.is_self(target_id)
    }
}
