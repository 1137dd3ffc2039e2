//! smarthome-auth - Headless auth client core for the smart-home app.
//!
//! Implements everything the sign-up / sign-in screens need short of
//! rendering: declarative field validation, an observable form-state store,
//! the two-step registration wizard, the submission mutator with
//! server-error mapping, session-token storage and the auth guard.
//!
//! # Layers
//!
//! - **config**: environment settings and shared constants
//! - **domain**: user profile and phone value object
//! - **forms**: validation rules, form state, the concrete screens
//! - **api**: wire types and the reqwest client
//! - **session**: the single session-token slot
//! - **services**: submission mutator, auth guard, navigation seam
//! - **utils**: small helpers
//! - **errors**: centralized error handling

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod services;
pub mod session;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::{AuthApi, AuthResponse, HttpAuthApi, SignInRequest, SignUpRequest};
pub use config::Config;
pub use domain::{User, UserRole};
pub use errors::{AuthError, AuthResult, FieldErrorMap};
pub use forms::{SignInForm, SignUpStep, SignUpWizard};
pub use services::{AuthGuard, GuardDecision, SubmitOutcome, Submitter};
pub use session::{MemoryStore, SessionStore};
