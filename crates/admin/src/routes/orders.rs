//! Order API handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, put},
};
use tracing::instrument;

use diverse_capital_core::OrderId;

use crate::error::{AppError, Result};
use crate::models::{Order, OrderPatch};
use crate::state::AppState;

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_orders))
        .route("/api/orders/{id}", put(update_order))
}

/// List every order.
#[instrument(skip(state))]
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.store().orders().list().await)
}

/// Merge the body into an existing order (typically a status change).
///
/// # Errors
///
/// Returns `AppError::NotFound` if no order has this ID, or an error if
/// the body is not a valid order payload.
#[instrument(skip(state, payload))]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    payload: std::result::Result<Option<Json<OrderPatch>>, JsonRejection>,
) -> Result<Json<Order>> {
    // No body at all is an empty patch
    let patch = payload?.map(|Json(patch)| patch).unwrap_or_default();
    let order = state
        .store()
        .orders()
        .update(&id, patch)
        .await
        .ok_or(AppError::NotFound("Order"))?;
    tracing::info!(order_id = %order.id, status = %order.status, "Order updated");
    Ok(Json(order))
}
