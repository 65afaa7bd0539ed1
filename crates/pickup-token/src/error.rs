//! Token error types.

use thiserror::Error;

/// Errors that can occur when issuing or verifying tokens.
///
/// `Expired` and `Invalid` are distinguishable so callers can log and
/// meter them separately, but both mean the same thing to the end user:
/// reauthenticate.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token's expiry has passed.
    #[error("token expired")]
    Expired,

    /// The token failed structural or signature validation.
    #[error("invalid token")]
    Invalid,

    /// Token signing failed.
    #[error("token signing error: {0}")]
    Signing(String),
}

impl TokenError {
    /// Checks if this is an expiry failure.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }

    /// Checks if this is a signature or structure failure.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Result type for token operations.
pub type TokenResult<T> = Result<T, TokenError>;
