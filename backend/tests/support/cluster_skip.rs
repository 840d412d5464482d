//! Policy for embedded cluster start-up failures.
//!
//! Developer machines and sandboxes often cannot start PostgreSQL, so the
//! database suites skip by default when the cluster fails to come up. CI sets
//! `REQUIRE_TEST_CLUSTER=1` to turn that skip into a hard failure.

/// Returns true when `REQUIRE_TEST_CLUSTER` is set to a truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles embedded cluster setup failures consistently across integration tests.
///
/// Prints a skip marker and returns `None` unless `REQUIRE_TEST_CLUSTER` is
/// truthy, in which case it panics so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
