//! Account lockout state machine.
//!
//! A pure function set over the failed-attempt counter and the optional
//! lock-expiry timestamp. No clock is read here; callers pass `now`
//! explicitly so lockout behavior is deterministic under test.

use chrono::{DateTime, Duration, Utc};

/// Default maximum consecutive failures before the account locks.
const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default lockout window in minutes.
const DEFAULT_LOCK_MINUTES: i64 = 15;

/// Checks whether an account is locked at the given instant.
#[must_use]
pub fn is_locked(lock_until: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    lock_until.is_some_and(|until| until > now)
}

/// Lockout policy: failure threshold and window length.
#[derive(Debug, Clone, Copy)]
pub struct LockoutPolicy {
    /// Consecutive failures at which the account locks.
    pub max_attempts: u32,
    /// Length of the lockout window.
    pub lock_duration: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            lock_duration: Duration::minutes(DEFAULT_LOCK_MINUTES),
        }
    }
}

impl LockoutPolicy {
    /// Sets the failure threshold.
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the lockout window length.
    #[must_use]
    pub const fn lock_duration(mut self, duration: Duration) -> Self {
        self.lock_duration = duration;
        self
    }

    /// Applies a failed login attempt.
    ///
    /// Returns the new counter and lock expiry. Reaching `max_attempts`
    /// sets the lock to `now + lock_duration`. A failure while already
    /// locked still counts but never extends the existing window, which
    /// bounds the lockout to exactly `lock_duration` from the triggering
    /// failure. An expired lock resets the counter before this failure
    /// counts.
    #[must_use]
    pub fn on_failure(
        &self,
        failed_attempts: u32,
        lock_until: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> (u32, Option<DateTime<Utc>>) {
        if is_locked(lock_until, now) {
            return (failed_attempts.saturating_add(1), lock_until);
        }

        let base = if lock_until.is_some() { 0 } else { failed_attempts };
        let attempts = base.saturating_add(1);
        let lock = (attempts >= self.max_attempts).then(|| now + self.lock_duration);
        (attempts, lock)
    }

    /// Applies a successful login: unconditional reset.
    #[must_use]
    pub const fn on_success() -> (u32, Option<DateTime<Utc>>) {
        (0, None)
    }
}
