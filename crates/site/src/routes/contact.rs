//! Contact form route handlers.
//!
//! Stores quote requests and general enquiries from the contact page.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::extract::ApiJson;
use crate::models::{Contact, ContactForm};
use crate::state::AppState;

/// Submit the contact form.
///
/// POST /api/contacts
///
/// # Errors
///
/// Returns 400 with field-level details if the body is not a valid contact
/// submission.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ContactForm>,
) -> Result<(StatusCode, Json<Contact>)> {
    let new_contact = form.validate()?;
    let contact = state.store().create_contact(new_contact).await;

    let contact_id = contact.id.to_string();
    tracing::info!(
        contact_id = %contact_id,
        service = contact.service.as_deref().unwrap_or("unspecified"),
        "Contact form submitted"
    );
    add_breadcrumb(
        "contact",
        "Contact form submitted",
        Some(&[("contact_id", contact_id.as_str())][..]),
    );

    Ok((StatusCode::CREATED, Json(contact)))
}
