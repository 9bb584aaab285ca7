//! Integration tests for the Global Logistics Solutions site.
//!
//! Tests drive the full router (routes plus middleware) in-process through
//! `tower::ServiceExt::oneshot`; no listener or network is involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gls-integration-tests
//! ```
//!
//! # Test Files
//!
//! - `api_tracking` - Shipment tracking lookups
//! - `api_forms` - Contact and careers submissions
//! - `api_blog` - Blog listing and detail
//! - `middleware` - Request IDs, security headers, fallbacks

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header::CONTENT_TYPE},
};
use gls_site::config::SiteConfig;
use gls_site::state::AppState;
use gls_site::store::RecordStore;
use serde_json::Value;
use tower::ServiceExt;

/// A router plus its state, so tests can inspect the store directly.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse the body as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// The body as UTF-8 text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

impl TestApp {
    /// App backed by the seeded store used in production.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_store(SiteConfig::default(), RecordStore::seeded())
    }

    /// App backed by an empty store, configured as with
    /// `SITE_SEED_SAMPLE_DATA=false`.
    #[must_use]
    pub fn empty() -> Self {
        let config = SiteConfig {
            seed_sample_data: false,
            ..SiteConfig::default()
        };
        Self::with_store(config, RecordStore::new())
    }

    #[must_use]
    pub fn with_store(config: SiteConfig, store: RecordStore) -> Self {
        let state = AppState::new(config, store);
        let router = gls_site::build_router(state.clone());
        Self { state, router }
    }

    /// Send a request through the full middleware stack.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// GET `uri`.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// POST `body` as JSON to `uri`.
    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        self.send(request).await
    }
}
