//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span carrying `request_id`)
//! 3. Security headers
//! 4. Request ID (reuse upstream `x-request-id` or generate one)
//! 5. Panic catcher (handler panic becomes a 500)

pub mod request_id;
pub mod security_headers;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
