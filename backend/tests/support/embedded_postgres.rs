//! Embedded PostgreSQL for repository integration tests.
//!
//! Suites share one cluster per test binary. Each test gets its own temporary
//! database, migrated with the same embedded migrations the server applies at
//! start-up, so the schema under test never drifts from production.

use std::fmt::Display;

use chat_backend::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use tokio::runtime::Runtime;

/// A fresh database with the schema applied.
pub struct MigratedDatabase {
    /// Connection URL for the temporary database.
    pub url: String,
    /// Number of migrations applied while provisioning.
    pub applied: usize,
    /// Dropped together with the test context.
    pub database: TemporaryDatabase,
}

/// Returns true when `SKIP_TEST_CLUSTER` is set to "1", "true" or "yes".
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles embedded cluster setup failures consistently across suites.
///
/// When `SKIP_TEST_CLUSTER` is truthy, prints a skip marker and returns
/// `None`. Otherwise panics so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Creates a temporary database on the shared cluster and migrates it.
pub fn provision_database(runtime: &Runtime) -> Result<MigratedDatabase, String> {
    let cluster = shared_cluster_handle().map_err(|err| format!("shared cluster: {err:?}"))?;
    let database = cluster
        .create_temporary_database()
        .map_err(|err| format!("temporary database: {err:?}"))?;
    let url = database.url().to_string();

    let applied = runtime
        .block_on(run_pending_migrations(&url))
        .map_err(|err| err.to_string())?;

    Ok(MigratedDatabase {
        url,
        applied,
        database,
    })
}
