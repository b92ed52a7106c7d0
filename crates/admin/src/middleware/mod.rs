//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, only when a DSN is configured)
//! 2. CORS (permissive unless disabled in config)
//! 3. `TraceLayer` (request span with method, uri, status, latency)
//! 4. Request ID (add unique ID to each request)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
