//! Shipment tracking route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::Shipment;
use crate::state::AppState;

/// Look up a shipment by tracking number.
///
/// GET /api/shipments/track/{trackingNumber}
///
/// # Errors
///
/// Returns 404 if no shipment has this tracking number.
#[instrument(skip(state))]
pub async fn track(
    State(state): State<AppState>,
    Path(tracking_number): Path<String>,
) -> Result<Json<Shipment>> {
    let Some(shipment) = state
        .store()
        .shipment_by_tracking_number(&tracking_number)
        .await
    else {
        tracing::debug!("Unknown tracking number");
        return Err(AppError::NotFound("Shipment"));
    };

    Ok(Json(shipment))
}
