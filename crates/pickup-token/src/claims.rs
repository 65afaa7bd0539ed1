//! Token claims.

use chrono::{DateTime, Utc};
use pickup_model::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Verified payload of a bearer token.
///
/// The role here is a snapshot at issuance time. It is never the live
/// source of truth: the access gate re-resolves the account's current
/// role before any authorization decision with lasting consequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account identifier.
    pub sub: Uuid,
    /// Role snapshot at issuance time.
    pub role: Role,
    /// Issued-at, as a Unix timestamp.
    pub iat: i64,
    /// Expiry, as a Unix timestamp.
    pub exp: i64,
    /// Issuer tag of the deploying service.
    pub iss: String,
}

impl Claims {
    /// Checks whether the claims are expired at the given instant.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}
