//! Career applications.

use chrono::{DateTime, Utc};
use gls_core::{Email, JobApplicationId};
use serde::{Deserialize, Serialize};

use super::omit_empty;
use crate::validation::{FormValidator, ValidationErrors, normalize_optional};

/// A stored job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: JobApplicationId,
    /// Title of the open position applied for.
    pub position: String,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    /// Resume link or pasted text.
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
}

/// Fields supplied when creating a [`JobApplication`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJobApplication {
    pub position: String,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

impl JobApplication {
    pub(crate) fn create(new: NewJobApplication, applied_at: DateTime<Utc>) -> Self {
        Self {
            id: JobApplicationId::generate(),
            position: new.position,
            name: new.name,
            email: new.email,
            phone: omit_empty(new.phone),
            resume: omit_empty(new.resume),
            cover_letter: omit_empty(new.cover_letter),
            applied_at,
        }
    }
}

/// Application form body as submitted by the careers page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationForm {
    pub position: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

impl JobApplicationForm {
    /// Validate the submission into an insert.
    ///
    /// # Errors
    ///
    /// Returns every invalid field: `position` and `name` are required and
    /// must not be blank, `email` must be a valid address.
    pub fn validate(self) -> Result<NewJobApplication, ValidationErrors> {
        let mut v = FormValidator::new();
        let position = v.required("position", self.position);
        let name = v.required("name", self.name);
        let email = v.email("email", self.email);
        v.finish()?;

        let email = email.ok_or_else(|| ValidationErrors::single("email", "Required"))?;

        Ok(NewJobApplication {
            position,
            name,
            email,
            phone: normalize_optional(self.phone),
            resume: normalize_optional(self.resume),
            cover_letter: normalize_optional(self.cover_letter),
        })
    }
}
