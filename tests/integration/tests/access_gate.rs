//! Access gating against the live account record.

use chrono::Utc;
use pickup_gate::{bearer_token, GateError};
use pickup_model::Role;

use crate::common::{registration, TestEnv};

#[tokio::test]
async fn deactivation_after_issuance_is_caught() {
    let env = TestEnv::new();
    let now = Utc::now();
    let (account, token) = env
        .auth
        .register(registration("a@x.com", Role::Customer), now)
        .await
        .unwrap();

    // The token still passes signature and expiry checks after the
    // account is deactivated; only the live-record check can reject it.
    env.store.set_active(account.id, false).unwrap();

    let err = env.gate.authenticate(&token, now).await.unwrap_err();
    assert!(matches!(err, GateError::AccountInactive));
}

#[tokio::test]
async fn role_gating_end_to_end() {
    let env = TestEnv::new();
    let now = Utc::now();

    let (_, admin_token) = env
        .auth
        .register(registration("admin@x.com", Role::Admin), now)
        .await
        .unwrap();
    let (_, customer_token) = env
        .auth
        .register(registration("customer@x.com", Role::Customer), now)
        .await
        .unwrap();

    let admin = env.gate.authenticate(&admin_token, now).await.unwrap();
    let customer = env.gate.authenticate(&customer_token, now).await.unwrap();

    assert!(env.gate.authorize(&admin, &[Role::Admin]).is_ok());
    assert!(env
        .gate
        .authorize(&customer, &[Role::Customer, Role::Collector])
        .is_ok());
    assert!(matches!(
        env.gate.authorize(&customer, &[Role::Admin]).unwrap_err(),
        GateError::NotAuthorized
    ));
}

#[tokio::test]
async fn anonymous_and_identified_callers() {
    let env = TestEnv::new();
    let now = Utc::now();
    let (account, token) = env
        .auth
        .register(registration("a@x.com", Role::Customer), now)
        .await
        .unwrap();

    // Anonymous: no token at all.
    assert!(env
        .gate
        .optional_authenticate(None, now)
        .await
        .unwrap()
        .is_none());

    // Identified: header-shaped token.
    let header = format!("Bearer {token}");
    let raw = bearer_token(&header).unwrap();
    let identity = env
        .gate
        .optional_authenticate(Some(raw), now)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(identity.id, account.id);

    // Self-service gating.
    assert!(env.gate.is_self(&identity, account.id));
}
