//! Field-level validation for submitted forms.
//!
//! Form wire types deserialize every field as optional so that a missing
//! field is reported alongside every other problem instead of aborting at the
//! first serde error. [`FormValidator`] collects those problems.

use gls_core::Email;
use serde::Serialize;

/// A single invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire (camelCase) name of the field, or `body` for whole-payload errors.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// One or more invalid fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// A single-field error.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    #[must_use]
    pub fn into_fields(self) -> Vec<FieldError> {
        self.0
    }
}

/// Collects field errors while a form is converted into an insert type.
#[derive(Debug, Default)]
pub struct FormValidator {
    errors: ValidationErrors,
}

impl FormValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A required text field: must be present and not blank. Returns the
    /// trimmed value (empty when invalid).
    pub fn required(&mut self, field: &str, value: Option<String>) -> String {
        match value {
            None => {
                self.errors.push(FieldError::new(field, "Required"));
                String::new()
            }
            Some(v) if v.trim().is_empty() => {
                self.errors.push(FieldError::new(field, "Must not be blank"));
                String::new()
            }
            Some(v) => v.trim().to_string(),
        }
    }

    /// A required email field.
    pub fn email(&mut self, field: &str, value: Option<String>) -> Option<Email> {
        let Some(raw) = value else {
            self.errors.push(FieldError::new(field, "Required"));
            return None;
        };
        match Email::parse(&raw) {
            Ok(email) => Some(email),
            Err(e) => {
                self.errors.push(FieldError::new(field, e.to_string()));
                None
            }
        }
    }

    /// Finish validation.
    ///
    /// # Errors
    ///
    /// Returns every collected field error if any check failed.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Normalize an optional text field: trimmed, with blank treated as absent.
#[must_use]
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
