//! Liveness, ping and demo handlers.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Build the ping/demo router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/demo", get(demo))
}

/// `{ "message": "..." }` response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Ping endpoint; the text comes from `PING_MESSAGE`.
pub async fn ping(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.config().ping_message.clone(),
    })
}

/// Fixed greeting used by the front end to check API wiring.
pub async fn demo() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the admin API".to_string(),
    })
}
