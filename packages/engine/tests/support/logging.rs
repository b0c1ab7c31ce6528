//! Installs the shared test subscriber once per integration test binary.
//!
//! Set `TEST_LOG=debug` (or `RUST_LOG`) to see engine traces while a test runs.

#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    test_support::logging::init();
}
