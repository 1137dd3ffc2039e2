//! Form layer: declarative validation rules, the observable form-state
//! store, and the two concrete screens built on top of it.

pub mod rules;
pub mod signin;
pub mod signup;
pub mod state;

pub use rules::{FieldRule, FieldValue};
pub use signin::SignInForm;
pub use signup::{SignUpStep, SignUpWizard};
pub use state::{FormEvent, FormState};
