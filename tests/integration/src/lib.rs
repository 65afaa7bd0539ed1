//! End-to-end test support for the pickup account-security core.
//!
//! The tests themselves live under `tests/`; this crate exists so they
//! can share the workspace dependency graph.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
