//! Centralized error handling.
//!
//! Provides a unified error type for the whole client, with a split between
//! field-scoped validation errors (rendered next to the offending input) and
//! everything else (normalized to a single banner message).

use std::collections::BTreeMap;

use thiserror::Error;

/// Per-field error messages, keyed by wire field name.
///
/// BTreeMap keeps iteration order stable so error assignment and test
/// assertions are deterministic.
pub type FieldErrorMap = BTreeMap<String, String>;

/// Client error types
#[derive(Error, Debug)]
pub enum AuthError {
    /// Server rejected the payload with a structured `errors` body.
    /// Each entry maps onto the matching local field's error slot.
    #[error("validation rejected by server")]
    FieldErrors(FieldErrorMap),

    /// Token missing, expired or rejected by the server.
    #[error("authentication required")]
    Unauthorized,

    /// Non-2xx response without a structured validation body.
    #[error("request failed with status {status}")]
    Api { status: u16 },

    /// Connection, timeout or protocol failure before a response arrived.
    #[error("network error")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("malformed server response")]
    Decode(#[source] serde_json::Error),

    /// Local misconfiguration (e.g. unparsable base URL).
    #[error("configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// User-facing message for errors that are not field-scoped.
    ///
    /// Transport and decode details are logged, never shown; the user gets a
    /// single generic banner.
    pub fn banner_message(&self) -> String {
        match self {
            // Field errors render inline, not in the banner.
            AuthError::FieldErrors(_) => String::new(),
            AuthError::Unauthorized => "Invalid credentials".to_string(),
            AuthError::Api { status } => {
                tracing::warn!(status = *status, "unstructured API failure");
                crate::config::GENERIC_ERROR_MSG.to_string()
            }
            AuthError::Transport(e) => {
                tracing::error!("transport error: {:?}", e);
                crate::config::GENERIC_ERROR_MSG.to_string()
            }
            AuthError::Decode(e) => {
                tracing::error!("response decode error: {}", e);
                crate::config::GENERIC_ERROR_MSG.to_string()
            }
            AuthError::Config(msg) => msg.clone(),
        }
    }
}

/// Result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Convenience constructors
impl AuthError {
    pub fn api(status: u16) -> Self {
        AuthError::Api { status }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AuthError::Config(msg.into())
    }
}
