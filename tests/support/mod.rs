//! Shared integration-test setup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the tracing subscriber once per test binary so `RUST_LOG`
/// controls test output the same way it controls the app.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}
