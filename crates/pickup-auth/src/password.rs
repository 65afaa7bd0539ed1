//! Password hashing and verification using Argon2id.
//!
//! Every hash embeds a fresh random salt and the configured work factors
//! in a PHC-formatted string. Verification recomputes and compares in
//! constant time relative to the digest layout. The plaintext is never
//! logged and never returned.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{AuthError, AuthResult};

/// Work-factor configuration for the credential hasher.
///
/// The single tunable knob balancing brute-force resistance against
/// request latency. Fixed at construction; changing it only affects
/// digests produced afterwards.
#[derive(Debug, Clone)]
pub struct HasherConfig {
    /// Memory cost in KiB.
    pub memory_cost: u32,
    /// Time cost (iterations).
    pub time_cost: u32,
    /// Parallelism factor.
    pub parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        // OWASP recommended settings for Argon2id
        Self {
            memory_cost: 19 * 1024, // 19 MiB
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl HasherConfig {
    /// Sets the memory cost in KiB.
    #[must_use]
    pub const fn memory_cost(mut self, kib: u32) -> Self {
        self.memory_cost = kib;
        self
    }

    /// Sets the time cost (iterations).
    #[must_use]
    pub const fn time_cost(mut self, iterations: u32) -> Self {
        self.time_cost = iterations;
        self
    }

    fn build_params(&self) -> Result<Params, argon2::Error> {
        Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
    }
}

/// One-way hasher for account secrets.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    config: HasherConfig,
}

impl CredentialHasher {
    /// Creates a hasher with the given work factors.
    #[must_use]
    pub const fn new(config: HasherConfig) -> Self {
        Self { config }
    }

    /// Creates a hasher with default work factors.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(HasherConfig::default())
    }

    /// Hashes a plaintext secret.
    ///
    /// Returns the PHC-formatted digest embedding a per-call random salt.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if the work factors are rejected or
    /// hashing fails. The message never contains the plaintext.
    pub fn hash(&self, plaintext: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let params = self
            .config
            .build_params()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let digest = argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(digest.to_string())
    }

    /// Verifies a plaintext secret against a stored digest.
    ///
    /// A malformed digest yields `false`, never an error: a record that
    /// cannot be parsed must not be treated as possibly correct.
    #[must_use]
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
