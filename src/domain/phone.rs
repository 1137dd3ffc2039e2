//! Phone number value object.
//!
//! The form collects phones in the masked RU format (`+7 (912) 345-67-89`);
//! the API expects digits only. This type owns that conversion so the
//! stripping rule lives in one place.

use crate::config::PHONE_REGEX;

/// A phone number as entered by the user (masked display form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    /// Wrap a raw input value without validating it.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The masked form as the user typed it.
    pub fn as_entered(&self) -> &str {
        &self.0
    }

    /// Whether the value matches the masked RU format.
    pub fn is_masked_format(&self) -> bool {
        PHONE_REGEX.is_match(&self.0)
    }

    /// Wire form: every non-digit character stripped.
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
