//! Careers route handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::extract::ApiJson;
use crate::models::{JobApplication, JobApplicationForm};
use crate::state::AppState;

/// Submit a job application.
///
/// POST /api/careers/apply
///
/// # Errors
///
/// Returns 400 with field-level details if the body is not a valid
/// application.
#[instrument(skip(state, form))]
pub async fn apply(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<JobApplicationForm>,
) -> Result<(StatusCode, Json<JobApplication>)> {
    let new_application = form.validate()?;
    let application = state.store().create_job_application(new_application).await;

    let application_id = application.id.to_string();
    tracing::info!(
        application_id = %application_id,
        position = %application.position,
        "Job application received"
    );
    add_breadcrumb(
        "careers",
        "Job application submitted",
        Some(&[
            ("application_id", application_id.as_str()),
            ("position", application.position.as_str()),
        ][..]),
    );

    Ok((StatusCode::CREATED, Json(application)))
}
