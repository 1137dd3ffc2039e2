//! Registration wizard: two validated steps feeding one submission payload.

use crate::api::types::SignUpRequest;
use crate::config::{
    DEFAULT_MAX_LENGTH_MSG, DEFAULT_REQUIRED_MSG, EMAIL_PATTERN_MSG, EMAIL_REGEX,
    FIELD_ACCEPT_PRIVACY_POLICY, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_PASSWORD,
    FIELD_PHONE, FIELD_REPEAT_PASSWORD, MAX_FIELD_LENGTH, PASSWORD_PATTERN_MSG, PHONE_PATTERN_MSG,
    PHONE_REGEX,
};
use crate::domain::Phone;
use crate::forms::rules::{password_ok, FieldRule, FieldValue};
use crate::forms::state::FormState;

/// Wizard stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpStep {
    /// Personal info: names, email, phone.
    Personal,
    /// Security: password, confirmation, privacy policy.
    Security,
}

/// Fields validated before leaving the personal step.
pub const PERSONAL_STEP_FIELDS: [&str; 4] =
    [FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_EMAIL, FIELD_PHONE];

/// Fields validated on the security step.
pub const SECURITY_STEP_FIELDS: [&str; 3] =
    [FIELD_PASSWORD, FIELD_REPEAT_PASSWORD, FIELD_ACCEPT_PRIVACY_POLICY];

/// Two-step registration wizard over an observable [`FormState`].
#[derive(Debug)]
pub struct SignUpWizard {
    form: FormState,
    step: SignUpStep,
}

impl Default for SignUpWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpWizard {
    pub fn new() -> Self {
        let text_rule = || {
            FieldRule::default()
                .required(DEFAULT_REQUIRED_MSG)
                .max_length(MAX_FIELD_LENGTH, DEFAULT_MAX_LENGTH_MSG)
        };
        let form = FormState::new([
            (FIELD_FIRST_NAME, text_rule(), FieldValue::Text(String::new())),
            (FIELD_LAST_NAME, text_rule(), FieldValue::Text(String::new())),
            (
                FIELD_EMAIL,
                text_rule().pattern(&EMAIL_REGEX, EMAIL_PATTERN_MSG),
                FieldValue::Text(String::new()),
            ),
            (
                FIELD_PHONE,
                FieldRule::default()
                    .required(DEFAULT_REQUIRED_MSG)
                    .pattern(&PHONE_REGEX, PHONE_PATTERN_MSG),
                FieldValue::Text(String::new()),
            ),
            (
                FIELD_PASSWORD,
                text_rule().predicate(password_ok, PASSWORD_PATTERN_MSG),
                FieldValue::Text(String::new()),
            ),
            (FIELD_REPEAT_PASSWORD, text_rule(), FieldValue::Text(String::new())),
            (
                FIELD_ACCEPT_PRIVACY_POLICY,
                FieldRule::default(),
                FieldValue::Flag(false),
            ),
        ]);
        Self {
            form,
            step: SignUpStep::Personal,
        }
    }

    /// Underlying form state (values, errors, banner, subscriptions).
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Currently active step.
    pub fn step(&self) -> SignUpStep {
        self.step
    }

    /// Try to move Personal -> Security. Validation over the personal-step
    /// fields gates the transition; failures stay put with errors recorded.
    pub fn advance(&mut self) -> bool {
        match self.step {
            SignUpStep::Personal => {
                if self.form.trigger(&PERSONAL_STEP_FIELDS) {
                    self.step = SignUpStep::Security;
                    true
                } else {
                    tracing::debug!(errors = ?self.form.errors(), "personal step blocked");
                    false
                }
            }
            SignUpStep::Security => false,
        }
    }

    /// Move Security -> Personal. Always allowed.
    pub fn back(&mut self) {
        self.step = SignUpStep::Personal;
    }

    /// Local submit gate, independent of rule validation: the privacy
    /// policy must be accepted and the two password fields non-empty and
    /// equal. Drives the submit control; produces no field errors.
    pub fn submit_ready(&self) -> bool {
        let password = self.form.text(FIELD_PASSWORD);
        let repeat = self.form.text(FIELD_REPEAT_PASSWORD);
        self.form.flag(FIELD_ACCEPT_PRIVACY_POLICY)
            && !password.is_empty()
            && !repeat.is_empty()
            && password == repeat
    }

    /// Run rule validation over every field of both steps.
    pub fn validate_all(&mut self) -> bool {
        let personal = self.form.trigger(&PERSONAL_STEP_FIELDS);
        let security = self.form.trigger(&SECURITY_STEP_FIELDS);
        personal && security
    }

    /// Build the wire payload. Phone goes out digits-only.
    pub fn payload(&self) -> SignUpRequest {
        SignUpRequest {
            email: self.form.text(FIELD_EMAIL),
            first_name: self.form.text(FIELD_FIRST_NAME),
            last_name: self.form.text(FIELD_LAST_NAME),
            password: self.form.text(FIELD_PASSWORD),
            phone: Phone::new(self.form.text(FIELD_PHONE)).digits(),
        }
    }
}
