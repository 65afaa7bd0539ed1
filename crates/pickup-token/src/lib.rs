//! # pickup-token
//!
//! Signed bearer-token service for the pickup account-security core.
//!
//! Issues and verifies time-bounded HS256 identity assertions. A token
//! carries the subject, the role *at issuance time*, and an issuer tag; it
//! carries no other authority and cannot be revoked, so callers making
//! decisions with lasting consequence must re-resolve the live account.
//!
//! ## Example
//!
//! ```ignore
//! use chrono::Utc;
//! use pickup_model::Role;
//! use pickup_token::{TokenConfig, TokenService};
//! use uuid::Uuid;
//!
//! let service = TokenService::new(TokenConfig::default(), b"signing-secret");
//! let now = Utc::now();
//! let token = service.issue(Uuid::now_v7(), Role::Customer, now)?;
//! let claims = service.verify(&token, now)?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod claims;
pub mod error;
pub mod service;

pub use claims::Claims;
pub use error::{TokenError, TokenResult};
pub use service::{TokenConfig, TokenService};
