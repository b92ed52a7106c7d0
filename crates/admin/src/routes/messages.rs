//! Contact message API handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use tracing::instrument;

use diverse_capital_core::MessageId;

use crate::error::{AppError, Result};
use crate::models::{Message, MessagePatch, NewMessage};
use crate::state::AppState;

/// Build the messages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/messages", get(list_messages).post(create_message))
        .route("/api/messages/{id}", put(update_message))
}

/// List every message.
#[instrument(skip(state))]
pub async fn list_messages(State(state): State<AppState>) -> Json<Vec<Message>> {
    Json(state.store().messages().list().await)
}

/// Store a contact-form submission.
///
/// # Errors
///
/// Returns an error if the body is not a valid submission.
#[instrument(skip(state, payload))]
pub async fn create_message(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewMessage>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>)> {
    let Json(new) = payload?;
    let message = state.store().messages().create(new).await;
    tracing::info!(message_id = %message.id, "Contact message received");
    Ok((StatusCode::CREATED, Json(message)))
}

/// Merge the body into an existing message (typically marking it read).
///
/// # Errors
///
/// Returns `AppError::NotFound` if no message has this ID, or an error if
/// the body is not a valid message payload.
#[instrument(skip(state, payload))]
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<MessageId>,
    payload: std::result::Result<Option<Json<MessagePatch>>, JsonRejection>,
) -> Result<Json<Message>> {
    // No body at all is an empty patch
    let patch = payload?.map(|Json(patch)| patch).unwrap_or_default();
    state
        .store()
        .messages()
        .update(&id, patch)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("Message"))
}
