//! Access gate error types.
//!
//! Token failures stay internally distinguishable (expired vs invalid vs
//! unknown subject) for logging and metrics, but every one of them
//! surfaces to the caller as the same "reauthenticate" signal.

use pickup_storage::StoreError;
use pickup_token::TokenError;
use thiserror::Error;

/// Authorization gate errors.
#[derive(Debug, Error)]
pub enum GateError {
    /// No token or no identity was presented at all. Distinct from a
    /// role mismatch: absence of identity is never treated as "no role".
    #[error("not authenticated")]
    Unauthenticated,

    /// The token failed verification (signature or expiry).
    #[error("invalid or expired token")]
    Token(#[from] TokenError),

    /// The token verified but its subject no longer resolves to an
    /// account.
    #[error("invalid or expired token")]
    UnknownSubject,

    /// The account behind the token has been deactivated.
    #[error("account is inactive")]
    AccountInactive,

    /// Role or ownership mismatch.
    #[error("you do not have permission to perform this action")]
    NotAuthorized,

    /// Infrastructure fault from the account store, propagated unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GateError {
    /// Checks whether this failure means the caller should obtain a new
    /// token.
    #[must_use]
    pub const fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated | Self::Token(_) | Self::UnknownSubject
        )
    }
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;
