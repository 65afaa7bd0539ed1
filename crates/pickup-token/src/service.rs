//! Token service for issuing and verifying bearer tokens.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use pickup_model::Role;
use uuid::Uuid;

use crate::claims::Claims;
use crate::error::{TokenError, TokenResult};

/// Default token time-to-live: 7 days.
const DEFAULT_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Token configuration.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Issuer tag, fixed to the deploying service's identity string.
    pub issuer: String,
    /// Token lifespan in seconds.
    pub ttl_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            issuer: "waste-pickup-app".to_string(),
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

impl TokenConfig {
    /// Sets the issuer tag.
    #[must_use]
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Sets the token lifespan in seconds.
    #[must_use]
    pub const fn ttl_secs(mut self, secs: i64) -> Self {
        self.ttl_secs = secs;
        self
    }
}

/// Service for issuing and verifying signed identity assertions.
///
/// Signing uses HS256 with a shared secret supplied at construction, never
/// read from ambient process state. Verification is a pure computation
/// (signature check plus clock comparison) and needs no synchronization.
#[derive(Clone)]
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("config", &self.config)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl TokenService {
    /// Creates a new token service from a shared signing secret.
    #[must_use]
    pub fn new(config: TokenConfig, secret: &[u8]) -> Self {
        Self {
            config,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Issues a signed token for the subject with its role at issuance
    /// time.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if signing fails.
    pub fn issue(&self, subject: Uuid, role: Role, now: DateTime<Utc>) -> TokenResult<String> {
        let claims = Claims {
            sub: subject,
            role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.config.ttl_secs)).timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verifies a token and returns its claims.
    ///
    /// Signature and structure are checked first; expiry is then checked
    /// against the explicit `now` so the two failure reasons stay
    /// distinguishable. Claims are never trusted before the signature
    /// checks out.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` on signature or structure failure and
    /// `TokenError::Expired` when the expiry has passed.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> TokenResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        // Expiry is compared against the caller's clock below, not the
        // process clock.
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            TokenError::Invalid
        })?;

        if data.claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }

    /// Parses a token's claims without checking signature or expiry.
    ///
    /// For diagnostics and expiry probing only. The returned claims are
    /// untrusted and must never feed an authorization decision; use
    /// [`TokenService::verify`] for that.
    #[must_use]
    pub fn decode_unverified(token: &str) -> Option<Claims> {
        let payload = token.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Checks whether a token is expired at the given instant.
    ///
    /// A token that cannot be parsed at all counts as expired.
    #[must_use]
    pub fn is_expired(token: &str, now: DateTime<Utc>) -> bool {
        Self::decode_unverified(token).map_or(true, |claims| claims.is_expired(now))
    }

    /// Returns the issuer tag.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.config.issuer
    }

    /// Returns the token configuration.
    #[must_use]
    pub const fn config(&self) -> &TokenConfig {
        &self.config
    }
}
