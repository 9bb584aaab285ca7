//! Global Logistics Solutions site library.
//!
//! Backend for the company's marketing site: an in-memory [`store::RecordStore`]
//! holding contact submissions, shipments, blog posts, and job applications,
//! and the JSON API the site's pages call.
//!
//! The crate is a library so the full router can be exercised in-process by
//! tests; `main.rs` adds configuration, telemetry, and the TCP listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod validation;

use axum::{Router, body::Body, http::Request};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Build the application router with its middleware stack.
///
/// Sentry layers are added by the binary after this, so they wrap the whole
/// stack.
pub fn build_router(state: AppState) -> Router {
    routes::routes()
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .with_state(state)
}

/// Span for one HTTP request. `request_id` is filled in by the request ID
/// middleware.
fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}
