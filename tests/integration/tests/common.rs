//! Common test utilities and fixtures.

use std::sync::Arc;

use pickup_auth::{Authenticator, CredentialHasher, HasherConfig, NewAccount};
use pickup_gate::AccessGate;
use pickup_model::Role;
use pickup_storage::MemoryAccountStore;
use pickup_token::{TokenConfig, TokenService};

/// Test environment wiring the whole core over an in-memory store.
pub struct TestEnv {
    /// Shared account store.
    pub store: Arc<MemoryAccountStore>,
    /// Registration/login orchestrator.
    pub auth: Authenticator,
    /// Access gate.
    pub gate: AccessGate,
    /// Token service sharing the environment's signing secret.
    pub tokens: TokenService,
}

impl TestEnv {
    /// Creates a fresh environment with fast hashing parameters.
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("pickup_auth=debug,pickup_gate=debug")
            .try_init();

        let store = Arc::new(MemoryAccountStore::new());
        let tokens = TokenService::new(TokenConfig::default(), b"integration-secret");

        let auth = Authenticator::new(store.clone(), tokens.clone()).with_hasher(
            CredentialHasher::new(HasherConfig::default().memory_cost(8).time_cost(1)),
        );
        let gate = AccessGate::new(tokens.clone(), store.clone());

        Self {
            store,
            auth,
            gate,
            tokens,
        }
    }
}

/// A well-formed registration request for the given email and role.
pub fn registration(email: &str, role: Role) -> NewAccount {
    NewAccount {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone_number: "1234567890".to_string(),
        password: "Str0ng!Pass".to_string(),
        confirm_password: "Str0ng!Pass".to_string(),
        role: Some(role),
    }
}
