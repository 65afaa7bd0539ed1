//! Account domain model.
//!
//! Accounts are the registered identities of the pickup service. They
//! carry credentials, a role, and the lockout state driven by login
//! outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;

/// A registered account.
///
/// The account record is owned by the store; the core mutates it only
/// through single read-modify-write operations and never holds it past
/// one operation.
///
/// # Security Note
///
/// `password_hash` contains the salted Argon2id digest of the account's
/// secret. It is skipped on serialization so it can never leak through a
/// response body, and it must never appear in logs or error messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    // === Identity ===
    /// Unique identifier.
    pub id: Uuid,
    /// Email address, unique and stored lower-cased.
    pub email: String,

    // === Profile ===
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone_number: String,
    /// Whether the email has been verified.
    pub email_verified: bool,

    // === Credentials ===
    /// Salted one-way digest of the account secret.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Account role.
    pub role: Role,

    // === Status ===
    /// Whether the account is active. Deactivation is a flag flip, never
    /// a hard delete.
    pub active: bool,

    // === Lockout State ===
    /// Consecutive failed login attempts.
    pub failed_attempts: u32,
    /// End of the lockout window, when locked.
    pub lock_until: Option<DateTime<Utc>>,
    /// Last successful login.
    pub last_login: Option<DateTime<Utc>>,

    // === Timestamps ===
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new active account with a zeroed lockout state.
    ///
    /// The email is normalized to lower case here so that the uniqueness
    /// invariant holds regardless of the caller's input casing.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            email: email.into().trim().to_lowercase(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            email_verified: false,
            password_hash: password_hash.into(),
            role,
            active: true,
            failed_attempts: 0,
            lock_until: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the first name.
    #[must_use]
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = name.into();
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = name.into();
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = phone.into();
        self
    }

    /// Sets whether the account is active.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Gets the account's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// Normalizes an email for lookup and uniqueness comparison.
    #[must_use]
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}
