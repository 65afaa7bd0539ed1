//! # pickup-auth
//!
//! Credential lifecycle and login orchestration for the pickup
//! account-security core.
//!
//! ## Features
//!
//! - Argon2id password hashing with per-call random salts
//! - Pure account-lockout state machine (bounded lock window)
//! - Registration and login orchestration over an [`AccountStore`]
//! - Input validation (email format, password strength, phone, role)
//!
//! ## Example
//!
//! ```ignore
//! use pickup_auth::Authenticator;
//!
//! let auth = Authenticator::new(store, tokens);
//! let (account, token) = auth.login("a@x.com", "Str0ng!Pass", Utc::now()).await?;
//! ```
//!
//! [`AccountStore`]: pickup_storage::AccountStore

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod authenticator;
pub mod error;
pub mod lockout;
pub mod password;
pub mod validate;

pub use authenticator::{Authenticator, NewAccount};
pub use error::{AuthError, AuthResult};
pub use lockout::{is_locked, LockoutPolicy};
pub use password::{CredentialHasher, HasherConfig};
pub use validate::{is_valid_email, is_valid_phone, PasswordRule};
