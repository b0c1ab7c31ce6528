//! Shared helpers for integration tests across the workspace.
//!
//! - [`logging::init`] installs a quiet, capture-friendly subscriber once.
//! - [`seed`] makes seeded scenarios reproducible from the environment.
//! - [`unique_str`] names scratch files and directories without collisions.

use ulid::Ulid;

pub mod logging;

/// Seed for a seeded scenario.
///
/// `TEST_SEED` overrides `default` so a failing run can be replayed with a
/// different deal without editing the test.
pub fn seed(default: u64) -> u64 {
    std::env::var("TEST_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Generate a unique string with the given prefix, as `{prefix}-{ulid}`.
///
/// ```
/// use test_support::unique_str;
///
/// let a = unique_str("sim");
/// let b = unique_str("sim");
/// assert_ne!(a, b);
/// assert!(a.starts_with("sim-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
