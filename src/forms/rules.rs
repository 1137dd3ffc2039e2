//! Declarative per-field validation rules.
//!
//! A [`FieldRule`] mirrors the rule descriptors the input components are
//! configured with: optional required/min/max/pattern slots, each carrying
//! the message to surface when it fails. Evaluation is a pure function of
//! (value, rule) and reports the first failing message.

use regex::Regex;

/// A single form field value.
///
/// Text inputs and checkboxes share one error surface, so they share one
/// value type too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Text content, empty for flags.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Flag state, `false` for text.
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Empty string or unchecked flag.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(b) => !b,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// Length constraint with its failure message.
#[derive(Debug, Clone)]
pub struct LengthRule {
    pub value: usize,
    pub message: &'static str,
}

/// Pattern constraint with its failure message.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub regex: &'static Regex,
    pub message: &'static str,
}

/// Declarative rule descriptor for one field.
///
/// Check order is fixed: required, max-length, min-length, pattern. Only the
/// first failing message is reported so the user fixes one thing at a time.
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    pub required: Option<&'static str>,
    pub max_length: Option<LengthRule>,
    pub min_length: Option<LengthRule>,
    pub pattern: Option<PatternRule>,
    /// Escape hatch for constraints a regex cannot express
    /// (the password letters-and-digits policy).
    pub predicate: Option<PredicateRule>,
}

/// Closure-style constraint with its failure message.
#[derive(Clone)]
pub struct PredicateRule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl std::fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateRule")
            .field("message", &self.message)
            .finish()
    }
}

impl FieldRule {
    /// Builder: field must be non-empty / checked.
    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    /// Builder: maximum character count.
    pub fn max_length(mut self, value: usize, message: &'static str) -> Self {
        self.max_length = Some(LengthRule { value, message });
        self
    }

    /// Builder: minimum character count.
    pub fn min_length(mut self, value: usize, message: &'static str) -> Self {
        self.min_length = Some(LengthRule { value, message });
        self
    }

    /// Builder: value must match `regex`.
    pub fn pattern(mut self, regex: &'static Regex, message: &'static str) -> Self {
        self.pattern = Some(PatternRule { regex, message });
        self
    }

    /// Builder: value must satisfy `check`.
    pub fn predicate(mut self, check: fn(&str) -> bool, message: &'static str) -> Self {
        self.predicate = Some(PredicateRule { check, message });
        self
    }

    /// Evaluate the rule against `value`, returning the first failing
    /// message. Length and pattern checks only apply to non-empty text:
    /// emptiness is the required rule's business.
    pub fn check(&self, value: &FieldValue) -> Option<&'static str> {
        if value.is_empty() {
            return self.required;
        }

        let text = value.as_text();
        let chars = text.chars().count();

        if let Some(rule) = &self.max_length {
            if chars > rule.value {
                return Some(rule.message);
            }
        }
        if let Some(rule) = &self.min_length {
            if chars < rule.value {
                return Some(rule.message);
            }
        }
        if let Some(rule) = &self.pattern {
            if !rule.regex.is_match(text) {
                return Some(rule.message);
            }
        }
        if let Some(rule) = &self.predicate {
            if !(rule.check)(text) {
                return Some(rule.message);
            }
        }
        None
    }
}

/// Password policy: at least [`crate::config::MIN_PASSWORD_LENGTH`]
/// alphanumeric characters with at least one letter and one digit.
///
/// Equivalent to `^(?=.*[A-Za-z])(?=.*\d)[A-Za-z\d]{8,}$`, which the `regex`
/// crate cannot express directly (no lookahead).
pub fn password_ok(value: &str) -> bool {
    let alnum_only = value.chars().all(|c| c.is_ascii_alphanumeric());
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    alnum_only && has_letter && has_digit && value.chars().count() >= crate::config::MIN_PASSWORD_LENGTH
}
