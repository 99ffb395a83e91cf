//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! helpers shared between suites live here and are pulled in with
//! `mod support;`.

pub mod embedded_postgres;

pub use embedded_postgres::{MigratedDatabase, handle_cluster_setup_failure, provision_database};
