//! Authentication error types.
//!
//! Business-rule failures are typed results, never faults. Externally
//! sensitive outcomes keep generic messages: an unknown email and a wrong
//! password are indistinguishable to the caller, while locked and inactive
//! accounts are recorded as distinct reasons for observability.

use chrono::{DateTime, Utc};
use pickup_storage::StoreError;
use thiserror::Error;

/// Authentication operation errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input; recoverable by correcting the input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An account with the same normalized email already exists.
    #[error("an account with this email already exists")]
    DuplicateAccount,

    /// Unknown email or wrong password. Intentionally one variant so the
    /// two cases cannot be told apart from outside.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Account is inside its lockout window.
    #[error("account locked due to too many login attempts")]
    AccountLocked {
        /// When the lockout window ends.
        until: Option<DateTime<Utc>>,
    },

    /// Account has been deactivated.
    #[error("account is inactive")]
    AccountInactive,

    /// Hashing or other internal failure.
    #[error("internal authentication error: {0}")]
    Internal(String),

    /// Infrastructure fault from the account store, propagated unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Checks if this is an invalid-credentials rejection.
    #[must_use]
    pub const fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Checks if this is a lockout rejection.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::AccountLocked { .. })
    }
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
