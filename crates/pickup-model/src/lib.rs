//! # pickup-model
//!
//! Domain models for the pickup account-security core (Account, Role,
//! Identity).
//!
//! This crate defines the entities shared by the authenticator, the token
//! service, and the access gate. It carries no business logic beyond the
//! invariants of the types themselves.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod account;
pub mod identity;
pub mod role;

pub use account::Account;
pub use identity::Identity;
pub use role::{ParseRoleError, Role};
