//! # pickup-storage
//!
//! Account store abstraction for the pickup account-security core.
//!
//! This crate defines the [`AccountStore`] trait the core consumes and a
//! thread-safe in-memory implementation ([`MemoryAccountStore`]) for tests
//! and single-process deployments. Durable backends (SQL, document stores)
//! implement the same trait.
//!
//! The store owns persistence and concurrency control: the login-state
//! update applies a caller-supplied transition to the state the store
//! currently holds, as a single atomic read-modify-write keyed by account
//! id, so concurrent login attempts against one account never lose
//! counter increments.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod account;
pub mod error;
pub mod memory;

pub use account::{AccountStore, LoginState, LoginStateTransition};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryAccountStore;
