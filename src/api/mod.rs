//! API layer: wire types and the HTTP client for the remote auth service.

pub mod client;
pub mod types;

pub use client::{AuthApi, HttpAuthApi};
#[cfg(any(test, feature = "test-utils"))]
pub use client::MockAuthApi;
pub use types::{AuthResponse, ServerValidationErrors, SignInRequest, SignUpRequest};
