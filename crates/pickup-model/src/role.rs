//! Role domain model.
//!
//! Roles form a closed set used for role-based access control. Free-text
//! role strings never enter the system: parsing rejects anything outside
//! the enumeration, and checks are exhaustive matches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unrecognized role string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// An account role.
///
/// The set is closed by design: a role that is not one of these three
/// cannot be constructed, so an unrecognized role can neither silently
/// pass nor silently fail an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A customer requesting pickups.
    Customer,
    /// A collector fulfilling pickups.
    Collector,
    /// An administrator.
    Admin,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Self; 3] = [Self::Customer, Self::Collector, Self::Admin];

    /// Returns the string representation used in storage and tokens.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Collector => "collector",
            Self::Admin => "admin",
        }
    }
}

impl Default for Role {
    /// New registrations default to customer, matching the registration
    /// flow's fallback when no role is supplied.
    fn default() -> Self {
        Self::Customer
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "collector" => Ok(Self::Collector),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
