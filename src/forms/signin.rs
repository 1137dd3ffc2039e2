//! Sign-in form: single step, no cross-field invariants.

use crate::api::types::SignInRequest;
use crate::config::{
    DEFAULT_MAX_LENGTH_MSG, DEFAULT_REQUIRED_MSG, FIELD_EMAIL, FIELD_PASSWORD, FIELD_REMEMBER,
    MAX_FIELD_LENGTH,
};
use crate::forms::rules::{FieldRule, FieldValue};
use crate::forms::state::FormState;

/// Fields validated before a sign-in submission.
pub const SIGN_IN_FIELDS: [&str; 2] = [FIELD_EMAIL, FIELD_PASSWORD];

/// Sign-in form over an observable [`FormState`].
#[derive(Debug)]
pub struct SignInForm {
    form: FormState,
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInForm {
    pub fn new() -> Self {
        let text_rule = || {
            FieldRule::default()
                .required(DEFAULT_REQUIRED_MSG)
                .max_length(MAX_FIELD_LENGTH, DEFAULT_MAX_LENGTH_MSG)
        };
        let form = FormState::new([
            (FIELD_EMAIL, text_rule(), FieldValue::Text(String::new())),
            (FIELD_PASSWORD, text_rule(), FieldValue::Text(String::new())),
            (FIELD_REMEMBER, FieldRule::default(), FieldValue::Flag(false)),
        ]);
        Self { form }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Whether the session should outlive the tab. Recorded with the form
    /// but not sent to the server.
    pub fn remember(&self) -> bool {
        self.form.flag(FIELD_REMEMBER)
    }

    /// Trigger validation over both credential fields.
    pub fn validate(&mut self) -> bool {
        self.form.trigger(&SIGN_IN_FIELDS)
    }

    /// Build the wire payload.
    pub fn payload(&self) -> SignInRequest {
        SignInRequest {
            email: self.form.text(FIELD_EMAIL),
            password: self.form.text(FIELD_PASSWORD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_fails_validation() {
        let mut form = SignInForm::new();
        assert!(!form.validate());
        assert_eq!(form.form().error(FIELD_EMAIL), Some(DEFAULT_REQUIRED_MSG));
        assert_eq!(form.form().error(FIELD_PASSWORD), Some(DEFAULT_REQUIRED_MSG));
    }

    #[test]
    fn filled_form_produces_payload() {
        let mut form = SignInForm::new();
        form.form_mut().set(FIELD_EMAIL, "ada@example.com");
        form.form_mut().set(FIELD_PASSWORD, "Passw0rd");
        form.form_mut().set(FIELD_REMEMBER, true);

        assert!(form.validate());
        assert!(form.remember());
        let payload = form.payload();
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.password, "Passw0rd");
    }
}
