//! HTTP route handlers for the site API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                              - Liveness check
//! GET  /health/ready                        - Readiness check with record counts
//!
//! # Tracking
//! GET  /api/shipments/track/{trackingNumber} - Shipment by tracking number
//!
//! # Forms
//! POST /api/contacts                        - Contact form submission
//! POST /api/careers/apply                   - Job application
//!
//! # Blog
//! GET  /api/blog                            - All posts, newest first
//! GET  /api/blog/{slug}                     - Post by slug
//! ```

pub mod blog;
pub mod careers;
pub mod contact;
pub mod health;
pub mod shipments;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shipments/track/{tracking_number}",
            get(shipments::track),
        )
        .route("/contacts", post(contact::create))
        .route("/careers/apply", post(careers::apply))
        .nest("/blog", blog::router())
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
        .fallback(not_found)
}

/// Fallback for unknown paths.
async fn not_found() -> AppError {
    AppError::NotFound("Route")
}
