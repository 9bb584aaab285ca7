//! Contact form submissions.

use chrono::{DateTime, Utc};
use gls_core::{ContactId, Email};
use serde::{Deserialize, Serialize};

use super::omit_empty;
use crate::validation::{FormValidator, ValidationErrors, normalize_optional};

/// A stored contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// Service the visitor is asking about (e.g. "Ocean Freight").
    pub service: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a [`Contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

impl Contact {
    /// Build a record from its insert type, generating the id.
    pub(crate) fn create(new: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ContactId::generate(),
            name: new.name,
            email: new.email,
            phone: omit_empty(new.phone),
            company: omit_empty(new.company),
            service: omit_empty(new.service),
            message: new.message,
            created_at,
        }
    }
}

/// Contact form body as submitted by the browser.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Validate the submission into an insert.
    ///
    /// # Errors
    ///
    /// Returns every invalid field: `name` and `message` are required and
    /// must not be blank, `email` must be a valid address.
    pub fn validate(self) -> Result<NewContact, ValidationErrors> {
        let mut v = FormValidator::new();
        let name = v.required("name", self.name);
        let email = v.email("email", self.email);
        let message = v.required("message", self.message);
        v.finish()?;

        let email = email.ok_or_else(|| ValidationErrors::single("email", "Required"))?;

        Ok(NewContact {
            name,
            email,
            phone: normalize_optional(self.phone),
            company: normalize_optional(self.company),
            service: normalize_optional(self.service),
            message,
        })
    }
}
