//! Wire types for the authentication API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{EMAIL_REGEX, MAX_FIELD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::domain::User;

/// Registration payload for `POST /auth/signup`.
///
/// The `validator` derive is the final pre-send gate; the interactive
/// `FieldRule` checks run long before a request is built, so a validation
/// failure here means a bug in the form gating, not user error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 20, message = "Invalid first name"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 20, message = "Invalid last name"))]
    pub last_name: String,
    #[validate(length(min = 8, max = 20, message = "Invalid password"))]
    pub password: String,
    /// Digits only; the masked display form never goes over the wire.
    #[validate(length(min = 10, max = 15, message = "Invalid phone number"))]
    pub phone: String,
}

/// Login payload for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful authentication response: session token plus profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Structured 4xx body carrying per-field messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerValidationErrors {
    pub errors: BTreeMap<String, String>,
}

// Compile-time guards: the wire limits must stay in lockstep with the
// interactive rules in `config::constants`.
const _: () = assert!(MAX_FIELD_LENGTH == 20);
const _: () = assert!(MIN_PASSWORD_LENGTH == 8);
