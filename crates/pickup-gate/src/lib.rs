//! # pickup-gate
//!
//! Role-based access gating for the pickup account-security core.
//!
//! The gate turns a raw bearer token into a live [`Identity`] and checks
//! that identity against a required role set or a resource owner. Token
//! claims are only ever a pointer back to the account: every decision is
//! made against the current record, so a deactivated account is caught
//! even while its tokens still pass signature and expiry checks.
//!
//! [`Identity`]: pickup_model::Identity

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod gate;

pub use error::{GateError, GateResult};
pub use gate::{bearer_token, AccessGate};
