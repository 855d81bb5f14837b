//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! registry of persons test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known-good and known-bad identity and mobile numbers
//! - `builders`: Builder for registration requests with realistic defaults
//! - `assertions`: Assertions on error kinds and field errors
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per process
///
/// Honours `RUST_LOG`; defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
