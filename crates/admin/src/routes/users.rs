//! User API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use tracing::instrument;

use diverse_capital_core::UserId;

use crate::models::User;
use crate::state::AppState;

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/{id}", delete(delete_user))
}

/// List every user.
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store().users().list().await)
}

/// Delete a user. Succeeds whether or not it existed; orders are kept.
#[instrument(skip(state))]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<UserId>) -> StatusCode {
    if state.store().users().delete(&id).await {
        tracing::info!(user_id = %id, "User deleted");
    } else {
        tracing::debug!(user_id = %id, "Delete of unknown user ignored");
    }
    StatusCode::NO_CONTENT
}
