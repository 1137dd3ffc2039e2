//! Navigation seam.
//!
//! The routing library is a black box to this crate; the submitter only
//! needs "go to this route once". The UI shell provides the real
//! implementation, tests provide a mock.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Route navigation as seen by the submission mutator.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Navigator: Send + Sync {
    /// Navigate to `route`.
    fn navigate(&self, route: &str);
}

/// No-op navigator for headless use (CLI smoke tests, prefetching).
#[derive(Debug, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&self, route: &str) {
        tracing::debug!(route, "navigation requested (no-op)");
    }
}
