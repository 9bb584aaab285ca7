//! Health check handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;
use crate::store::StoreCounts;

/// Body of the readiness probe.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    /// Whether the store was seeded with sample data on startup.
    pub sample_data: bool,
    #[serde(flatten)]
    pub counts: StoreCounts,
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// The store is in-process, so it is ready as soon as the server is; the
/// record counts make it easy to confirm seeding from a probe.
pub async fn readiness(State(state): State<AppState>) -> Json<Readiness> {
    Json(Readiness {
        sample_data: state.config().seed_sample_data,
        counts: state.store().counts().await,
    })
}
