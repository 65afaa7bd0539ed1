//! End-to-end integration tests.
//!
//! These tests exercise the full credential lifecycle — registration,
//! login, lockout, token verification, and access gating — over the
//! in-memory account store, with time supplied explicitly so lockout and
//! expiry behavior is deterministic.

mod common;

mod access_gate;
mod auth_flows;
mod token_operations;
