//! Request correlation IDs.
//!
//! A caller or upstream proxy may supply `x-request-id`; it is reused only if
//! it is a short token of ASCII letters, digits, `-`, `_` or `.`. Anything
//! else is replaced with a fresh UUID v4 so that header values echoed back
//! and written to logs stay well-formed.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied ID that is reused.
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Whether a caller-supplied ID can be reused as-is.
fn is_valid_request_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

/// Pick the request's ID: the caller's if acceptable, otherwise a new UUID.
fn resolve_request_id(request: &Request) -> String {
    let supplied = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .map(|value| value.to_str().unwrap_or_default());

    match supplied {
        Some(id) if is_valid_request_id(id) => id.to_owned(),
        Some(_) => {
            tracing::debug!("Ignoring malformed x-request-id header");
            Uuid::new_v4().to_string()
        }
        None => Uuid::new_v4().to_string(),
    }
}

/// Tag the request span and Sentry scope with a request ID and return it in
/// the response headers.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(&request);

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, middleware, routing::get};
    use tower::ServiceExt;

    use super::*;

    async fn echoed_id(header: Option<&str>) -> String {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(request_id_middleware));

        let mut builder = axum::http::Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(REQUEST_ID_HEADER, value);
        }
        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .unwrap()
            .to_owned()
    }

    fn is_uuid(id: &str) -> bool {
        Uuid::parse_str(id).is_ok()
    }

    #[test]
    fn test_valid_request_ids() {
        assert!(is_valid_request_id("abc-123"));
        assert!(is_valid_request_id("trace_01.A"));
        assert!(is_valid_request_id(&"a".repeat(MAX_REQUEST_ID_LEN)));
    }

    #[test]
    fn test_invalid_request_ids() {
        assert!(!is_valid_request_id(""));
        assert!(!is_valid_request_id("has space"));
        assert!(!is_valid_request_id("semi;colon"));
        assert!(!is_valid_request_id(&"a".repeat(MAX_REQUEST_ID_LEN + 1)));
    }

    #[tokio::test]
    async fn test_well_formed_id_is_echoed() {
        assert_eq!(echoed_id(Some("req-42")).await, "req-42");
    }

    #[tokio::test]
    async fn test_missing_id_is_generated() {
        assert!(is_uuid(&echoed_id(None).await));
    }

    #[tokio::test]
    async fn test_empty_or_malformed_id_is_replaced() {
        let too_long = "x".repeat(200);
        for bad in ["", "two words", "<script>", too_long.as_str()] {
            let id = echoed_id(Some(bad)).await;
            assert_ne!(id, bad);
            assert!(is_uuid(&id), "expected a generated UUID, got {id}");
        }
    }
}
