//! Login and registration orchestration.
//!
//! The authenticator owns no durable state: it reads an account, applies
//! the lockout state machine and the credential hasher, and writes the
//! outcome back through a single atomic store update.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pickup_model::{Account, Role};
use pickup_storage::{AccountStore, LoginState};
use pickup_token::TokenService;

use crate::error::{AuthError, AuthResult};
use crate::lockout::{is_locked, LockoutPolicy};
use crate::password::CredentialHasher;
use crate::validate::{is_valid_email, is_valid_phone, PasswordRule};

/// Registration request.
#[derive(Clone)]
pub struct NewAccount {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address; normalized before storage.
    pub email: String,
    /// Phone number.
    pub phone_number: String,
    /// Plaintext secret.
    pub password: String,
    /// Plaintext secret, repeated.
    pub confirm_password: String,
    /// Requested role; defaults to customer when absent.
    pub role: Option<Role>,
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Orchestrates account registration and login.
///
/// Stateless with respect to its own memory; all durable state lives in
/// the [`AccountStore`], and the login-state write is a single atomic
/// update keyed by account id so concurrent attempts never lose counter
/// increments.
pub struct Authenticator {
    store: Arc<dyn AccountStore>,
    tokens: TokenService,
    hasher: CredentialHasher,
    lockout: LockoutPolicy,
    rule: PasswordRule,
}

impl Authenticator {
    /// Creates an authenticator with default hasher, lockout policy, and
    /// password rule.
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>, tokens: TokenService) -> Self {
        Self {
            store,
            tokens,
            hasher: CredentialHasher::with_defaults(),
            lockout: LockoutPolicy::default(),
            rule: PasswordRule::default(),
        }
    }

    /// Sets the credential hasher.
    #[must_use]
    pub fn with_hasher(mut self, hasher: CredentialHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Sets the lockout policy.
    #[must_use]
    pub const fn with_lockout(mut self, lockout: LockoutPolicy) -> Self {
        self.lockout = lockout;
        self
    }

    /// Sets the password strength rule.
    #[must_use]
    pub fn with_password_rule(mut self, rule: PasswordRule) -> Self {
        self.rule = rule;
        self
    }

    /// Registers a new account and issues a token for immediate sign-in.
    ///
    /// The case-insensitive uniqueness check precedes the write; a
    /// concurrent create racing past the pre-check is still caught by the
    /// store's unique constraint.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` for missing or malformed input,
    /// `AuthError::DuplicateAccount` if the normalized email is taken, and
    /// propagates store faults unmodified.
    pub async fn register(
        &self,
        request: NewAccount,
        now: DateTime<Utc>,
    ) -> AuthResult<(Account, String)> {
        let required = [
            (&request.first_name, "first name"),
            (&request.last_name, "last name"),
            (&request.email, "email"),
            (&request.phone_number, "phone number"),
            (&request.password, "password"),
            (&request.confirm_password, "confirm password"),
        ];
        for (value, field) in required {
            if value.trim().is_empty() {
                return Err(AuthError::validation(format!("{field} is required")));
            }
        }

        if !is_valid_email(&request.email) {
            return Err(AuthError::validation("invalid email format"));
        }
        if !is_valid_phone(&request.phone_number) {
            return Err(AuthError::validation("invalid phone number"));
        }
        self.rule
            .validate(&request.password)
            .map_err(AuthError::Validation)?;
        if request.password != request.confirm_password {
            return Err(AuthError::validation("passwords do not match"));
        }

        let email = Account::normalize_email(&request.email);
        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateAccount);
        }

        let digest = self.hasher.hash(&request.password)?;
        let account = Account::new(email, digest, request.role.unwrap_or_default(), now)
            .with_first_name(request.first_name.trim())
            .with_last_name(request.last_name.trim())
            .with_phone_number(request.phone_number.trim());

        let account = match self.store.create(&account).await {
            Ok(account) => account,
            Err(e) if e.is_duplicate() => return Err(AuthError::DuplicateAccount),
            Err(e) => return Err(e.into()),
        };

        let token = self
            .tokens
            .issue(account.id, account.role, now)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(account_id = %account.id, role = %account.role, "account registered");
        Ok((account, token))
    }

    /// Authenticates an email/password pair and issues a token.
    ///
    /// Lock and active checks run before password verification, so a
    /// locked or deactivated account never pays the hashing cost and
    /// never learns whether the password was right.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email or a
    /// wrong password (indistinguishable by design),
    /// `AuthError::AccountLocked` inside the lockout window,
    /// `AuthError::AccountInactive` for deactivated accounts, and
    /// propagates store faults unmodified.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> AuthResult<(Account, String)> {
        let email = Account::normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::validation("email and password are required"));
        }

        // An unknown email collapses into the same outcome as a wrong
        // password to avoid account enumeration.
        let Some(account) = self.store.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if is_locked(account.lock_until, now) {
            tracing::warn!(account_id = %account.id, "login rejected: account locked");
            return Err(AuthError::AccountLocked {
                until: account.lock_until,
            });
        }

        if !account.active {
            tracing::warn!(account_id = %account.id, "login rejected: account inactive");
            return Err(AuthError::AccountInactive);
        }

        if !self.hasher.verify(password, &account.password_hash) {
            // The transition runs against the state the store holds at
            // update time, so a concurrent failure on the same account is
            // never overwritten by this one's stale read.
            let updated = self
                .store
                .atomic_update_login_state(account.id, &|current| {
                    let (failed_attempts, lock_until) =
                        self.lockout
                            .on_failure(current.failed_attempts, current.lock_until, now);
                    LoginState {
                        failed_attempts,
                        lock_until,
                        last_login: current.last_login,
                    }
                })
                .await?;

            tracing::warn!(
                account_id = %updated.id,
                failed_attempts = updated.failed_attempts,
                locked = updated.lock_until.is_some(),
                "login failed: bad credentials"
            );
            return Err(AuthError::InvalidCredentials);
        }

        let account = self
            .store
            .atomic_update_login_state(account.id, &|_| {
                let (failed_attempts, lock_until) = LockoutPolicy::on_success();
                LoginState {
                    failed_attempts,
                    lock_until,
                    last_login: Some(now),
                }
            })
            .await?;

        let token = self
            .tokens
            .issue(account.id, account.role, now)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(account_id = %account.id, "login succeeded");
        Ok((account, token))
    }
}
