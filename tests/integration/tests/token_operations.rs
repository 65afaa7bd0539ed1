//! Token issuance and verification behavior.

use chrono::{Duration, Utc};
use pickup_model::Role;
use pickup_token::TokenService;
use uuid::Uuid;

use crate::common::TestEnv;

const WEEK_SECS: i64 = 7 * 24 * 60 * 60;

#[tokio::test]
async fn round_trip_preserves_subject_and_role() {
    let env = TestEnv::new();
    let subject = Uuid::now_v7();
    let t0 = Utc::now();

    let token = env.tokens.issue(subject, Role::Admin, t0).unwrap();

    let claims = env
        .tokens
        .verify(&token, t0 + Duration::seconds(WEEK_SECS - 1))
        .unwrap();
    assert_eq!(claims.sub, subject);
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.iss, "waste-pickup-app");
}

#[tokio::test]
async fn expiry_and_signature_failures_are_distinct() {
    let env = TestEnv::new();
    let t0 = Utc::now();
    let token = env.tokens.issue(Uuid::now_v7(), Role::Customer, t0).unwrap();

    let expired = env
        .tokens
        .verify(&token, t0 + Duration::seconds(WEEK_SECS + 1))
        .unwrap_err();
    assert!(expired.is_expired());

    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });
    let invalid = env.tokens.verify(&tampered, t0).unwrap_err();
    assert!(invalid.is_invalid());
}

#[tokio::test]
async fn unverified_decode_is_structural_only() {
    let env = TestEnv::new();
    let subject = Uuid::now_v7();
    let t0 = Utc::now();
    let token = env.tokens.issue(subject, Role::Collector, t0).unwrap();

    // The probe reads claims even after expiry, but verification still
    // rejects.
    let late = t0 + Duration::seconds(WEEK_SECS + 1);
    let claims = TokenService::decode_unverified(&token).unwrap();
    assert_eq!(claims.sub, subject);
    assert!(TokenService::is_expired(&token, late));
    assert!(env.tokens.verify(&token, late).is_err());
}

#[tokio::test]
async fn login_token_carries_the_account_role() {
    let env = TestEnv::new();
    let now = Utc::now();
    let (account, _) = env
        .auth
        .register(crate::common::registration("c@x.com", Role::Collector), now)
        .await
        .unwrap();

    let (_, token) = env.auth.login("c@x.com", "Str0ng!Pass", now).await.unwrap();
    let claims = env.tokens.verify(&token, now).unwrap();

    assert_eq!(claims.sub, account.id);
    assert_eq!(claims.role, Role::Collector);
}
