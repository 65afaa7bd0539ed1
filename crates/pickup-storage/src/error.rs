//! Store error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during account store operations.
///
/// Business-rule outcomes (`Duplicate`, `NotFound`) are mapped to typed
/// results by the caller; infrastructure faults (`Connection`, `Internal`)
/// propagate upward unmodified so the caller can apply its own retry
/// policy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Account not found by id.
    #[error("account not found: {id}")]
    NotFound {
        /// Account id.
        id: Uuid,
    },

    /// Unique constraint violation.
    #[error("duplicate account: {field} already exists")]
    Duplicate {
        /// Field that caused the conflict.
        field: &'static str,
    },

    /// Store connection error.
    #[error("store connection error: {0}")]
    Connection(String),

    /// Internal store error.
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a not found error.
    #[must_use]
    pub const fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Creates a duplicate error for a field.
    #[must_use]
    pub const fn duplicate(field: &'static str) -> Self {
        Self::Duplicate { field }
    }

    /// Checks if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Checks if this is a duplicate error.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Checks if this is an infrastructure fault rather than a
    /// business-rule outcome.
    #[must_use]
    pub const fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Internal(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
