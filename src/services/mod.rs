//! Application services: the submission mutator tying forms to the API and
//! session, and the guard protecting authenticated routes.

pub mod guard;
pub mod navigator;
pub mod submission;

pub use guard::{AuthGuard, GuardDecision};
pub use navigator::{Navigator, NullNavigator};
#[cfg(any(test, feature = "test-utils"))]
pub use navigator::MockNavigator;
pub use submission::{SubmitOutcome, Submitter};
