//! Observable form-state container.
//!
//! Holds field values, per-field error messages and the touched set for one
//! form, and notifies subscribers on every mutation. The UI layer (out of
//! scope here) subscribes and re-renders; tests subscribe and assert.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::errors::FieldErrorMap;
use crate::forms::rules::{FieldRule, FieldValue};

/// Change notification emitted to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value changed.
    ValueChanged { field: String },
    /// A field's error message appeared, changed or cleared.
    ErrorChanged { field: String },
    /// The non-field banner appeared or cleared.
    BannerChanged,
}

type Listener = Box<dyn Fn(&FormEvent) + Send + Sync>;

/// Form-state store for one screen.
///
/// Values and rules are keyed by the wire field name, so server validation
/// errors map onto local fields without translation.
pub struct FormState {
    rules: HashMap<String, FieldRule>,
    values: HashMap<String, FieldValue>,
    errors: BTreeMap<String, String>,
    touched: HashSet<String>,
    banner: Option<String>,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("banner", &self.banner)
            .finish()
    }
}

impl FormState {
    /// Create a store from `(field, rule, initial value)` descriptors.
    pub fn new(fields: impl IntoIterator<Item = (&'static str, FieldRule, FieldValue)>) -> Self {
        let mut rules = HashMap::new();
        let mut values = HashMap::new();
        for (name, rule, initial) in fields {
            rules.insert(name.to_string(), rule);
            values.insert(name.to_string(), initial);
        }
        Self {
            rules,
            values,
            errors: BTreeMap::new(),
            touched: HashSet::new(),
            banner: None,
            listeners: Vec::new(),
        }
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl Fn(&FormEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self, event: FormEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// Current value of `field`, empty text if the field is unknown.
    pub fn value(&self, field: &str) -> FieldValue {
        self.values
            .get(field)
            .cloned()
            .unwrap_or(FieldValue::Text(String::new()))
    }

    /// Text content of `field`.
    pub fn text(&self, field: &str) -> String {
        self.value(field).as_text().to_string()
    }

    /// Flag state of `field`.
    pub fn flag(&self, field: &str) -> bool {
        self.value(field).as_flag()
    }

    /// Current error for `field`, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// All current field errors.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Whether `field` has been touched (edited or validated).
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Non-field banner message, if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Set a field's value, marking it dirty. A field that was already
    /// touched is re-validated immediately so its error clears (or updates)
    /// as the user types.
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        self.values.insert(field.to_string(), value);
        self.notify(FormEvent::ValueChanged {
            field: field.to_string(),
        });
        if self.touched.contains(field) {
            self.validate_field(field);
        }
    }

    /// Assign a server-reported error onto `field`. Unknown field names are
    /// the caller's problem; the store records them anyway so nothing is
    /// silently dropped.
    pub fn set_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
        self.notify(FormEvent::ErrorChanged {
            field: field.to_string(),
        });
    }

    /// Merge a whole server error map onto the matching fields. Entries for
    /// fields this form does not own land on the banner instead.
    pub fn apply_server_errors(&mut self, errors: &FieldErrorMap) {
        for (field, message) in errors {
            if self.rules.contains_key(field) {
                self.set_error(field, message.clone());
            } else {
                tracing::warn!(field = %field, "server error for unknown field");
                self.set_banner(message.clone());
            }
        }
    }

    /// Set the non-field banner message.
    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
        self.notify(FormEvent::BannerChanged);
    }

    /// Clear the non-field banner.
    pub fn clear_banner(&mut self) {
        if self.banner.take().is_some() {
            self.notify(FormEvent::BannerChanged);
        }
    }

    /// Validate one field against its rule, updating its error slot.
    /// Returns `true` when the field is valid.
    fn validate_field(&mut self, field: &str) -> bool {
        let Some(rule) = self.rules.get(field).cloned() else {
            return true;
        };
        let value = self.value(field);
        match rule.check(&value) {
            Some(message) => {
                self.errors.insert(field.to_string(), message.to_string());
                self.notify(FormEvent::ErrorChanged {
                    field: field.to_string(),
                });
                false
            }
            None => {
                if self.errors.remove(field).is_some() {
                    self.notify(FormEvent::ErrorChanged {
                        field: field.to_string(),
                    });
                }
                true
            }
        }
    }

    /// Trigger validation over `fields`, marking each as touched and
    /// recording errors. Returns `true` when every listed field passes.
    pub fn trigger(&mut self, fields: &[&str]) -> bool {
        let mut all_valid = true;
        for field in fields {
            self.touched.insert((*field).to_string());
            if !self.validate_field(field) {
                all_valid = false;
            }
        }
        all_valid
    }
}
