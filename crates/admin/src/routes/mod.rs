//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Liveness check
//!
//! # Products
//! GET    /api/products            - List products
//! POST   /api/products            - Create product (201)
//! PUT    /api/products/{id}       - Update product (404 if missing)
//! DELETE /api/products/{id}       - Delete product (204, idempotent)
//!
//! # Orders
//! GET    /api/orders              - List orders
//! PUT    /api/orders/{id}         - Update order (404 if missing)
//!
//! # Users
//! GET    /api/users               - List users
//! DELETE /api/users/{id}          - Delete user (204, idempotent)
//!
//! # Messages
//! GET    /api/messages            - List messages
//! POST   /api/messages            - Contact form submission (201)
//! PUT    /api/messages/{id}       - Update message (404 if missing)
//!
//! # Settings
//! GET    /api/settings            - Site settings
//! PUT    /api/settings            - Merge into site settings
//!
//! # Dashboard & site
//! GET    /api/stats               - Dashboard aggregates
//! GET    /api/projections/crypto  - Mining ROI projection
//! GET    /api/ping                - Ping (text from PING_MESSAGE)
//! GET    /api/demo                - Demo greeting
//! ```

pub mod messages;
pub mod orders;
pub mod products;
pub mod projections;
pub mod settings;
pub mod stats;
pub mod system;
pub mod users;

use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Build the API router (handlers only, no middleware).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(system::health))
        .merge(products::router())
        .merge(orders::router())
        .merge(users::router())
        .merge(messages::router())
        .merge(settings::router())
        .merge(stats::router())
        .merge(projections::router())
        .merge(system::router())
}

/// Build the complete application: routes, tracing, request IDs and CORS.
pub fn app(state: AppState) -> Router {
    let cors_permissive = state.config().cors_permissive;

    let router = routes()
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state);

    if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::AdminConfig;
    use crate::db::Store;
    use crate::state::AppState;

    /// Router over a seeded store, plus a handle to that store.
    pub fn seeded_app() -> (Router, Store) {
        let store = Store::seeded();
        let state = AppState::new(AdminConfig::default(), store.clone());
        (super::app(state), store)
    }

    /// Send a request and return the status and parsed JSON body
    /// (`Value::Null` for empty bodies).
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use super::test_support::{seeded_app, send};
    use crate::middleware::REQUEST_ID_HEADER;

    #[tokio::test]
    async fn test_health() {
        let (app, _) = seeded_app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_or_generated() {
        let (app, _) = seeded_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/ping")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");

        let response = app
            .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let generated = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_eq!(generated.len(), 36);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _) = seeded_app();
        let (status, _) = send(&app, Method::GET, "/api/nothing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
