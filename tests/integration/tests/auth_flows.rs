//! Registration and login flows, including the lockout window.

use chrono::{Duration, Utc};
use pickup_auth::AuthError;
use pickup_model::Role;
use pickup_storage::AccountStore;

use crate::common::{registration, TestEnv};

#[tokio::test]
async fn register_once_then_case_varied_duplicate_fails() {
    let env = TestEnv::new();
    let now = Utc::now();

    let (account, token) = env
        .auth
        .register(registration("a@x.com", Role::Customer), now)
        .await
        .unwrap();
    assert_eq!(account.email, "a@x.com");
    assert!(!token.is_empty());

    let err = env
        .auth
        .register(registration("A@X.Com", Role::Customer), now)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::DuplicateAccount));
}

#[tokio::test]
async fn registration_token_signs_the_caller_in() {
    let env = TestEnv::new();
    let now = Utc::now();

    let (account, token) = env
        .auth
        .register(registration("a@x.com", Role::Collector), now)
        .await
        .unwrap();

    let identity = env.gate.authenticate(&token, now).await.unwrap();
    assert_eq!(identity.id, account.id);
    assert_eq!(identity.role, Role::Collector);
}

#[tokio::test]
async fn lockout_window_end_to_end() {
    let env = TestEnv::new();
    let t0 = Utc::now();
    env.auth
        .register(registration("a@x.com", Role::Customer), t0)
        .await
        .unwrap();

    // Five consecutive wrong passwords, each an invalid-credentials
    // rejection.
    for _ in 0..5 {
        let err = env.auth.login("a@x.com", "wrong", t0).await.unwrap_err();
        assert!(err.is_invalid_credentials());
    }

    // The sixth attempt is rejected as locked even with the correct
    // password.
    let err = env
        .auth
        .login("a@x.com", "Str0ng!Pass", t0)
        .await
        .unwrap_err();
    assert!(err.is_locked());

    // Still locked one minute before the window closes.
    let err = env
        .auth
        .login("a@x.com", "Str0ng!Pass", t0 + Duration::minutes(14))
        .await
        .unwrap_err();
    assert!(err.is_locked());

    // Once the window has elapsed the correct password succeeds and the
    // counter resets.
    let t1 = t0 + Duration::minutes(16);
    let (account, _) = env.auth.login("a@x.com", "Str0ng!Pass", t1).await.unwrap();
    assert_eq!(account.failed_attempts, 0);
    assert!(account.lock_until.is_none());
    assert_eq!(account.last_login, Some(t1));
}

#[tokio::test]
async fn failures_inside_the_window_do_not_extend_it() {
    let env = TestEnv::new();
    let t0 = Utc::now();
    let (account, _) = env
        .auth
        .register(registration("a@x.com", Role::Customer), t0)
        .await
        .unwrap();

    for _ in 0..5 {
        env.auth.login("a@x.com", "wrong", t0).await.unwrap_err();
    }
    let locked = env.store.find_by_id(account.id).await.unwrap().unwrap();
    let original_expiry = locked.lock_until.unwrap();

    // A locked rejection does not re-touch the store, and the window
    // keeps its original expiry.
    env.auth
        .login("a@x.com", "wrong", t0 + Duration::minutes(10))
        .await
        .unwrap_err();
    let still_locked = env.store.find_by_id(account.id).await.unwrap().unwrap();
    assert_eq!(still_locked.lock_until, Some(original_expiry));
    assert_eq!(still_locked.failed_attempts, 5);
}

#[tokio::test]
async fn inactive_account_cannot_log_in() {
    let env = TestEnv::new();
    let now = Utc::now();
    let (account, _) = env
        .auth
        .register(registration("a@x.com", Role::Customer), now)
        .await
        .unwrap();

    env.store.set_active(account.id, false).unwrap();

    let err = env
        .auth
        .login("a@x.com", "Str0ng!Pass", now)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::AccountInactive));
}

#[tokio::test]
async fn successful_login_clears_earlier_failures() {
    let env = TestEnv::new();
    let now = Utc::now();
    let (account, _) = env
        .auth
        .register(registration("a@x.com", Role::Customer), now)
        .await
        .unwrap();

    for _ in 0..3 {
        env.auth.login("a@x.com", "wrong", now).await.unwrap_err();
    }

    env.auth
        .login("a@x.com", "Str0ng!Pass", now)
        .await
        .unwrap();

    let stored = env.store.find_by_id(account.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 0);
    assert!(stored.lock_until.is_none());
}
