//! Product API handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use tracing::instrument;

use diverse_capital_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{Product, ProductPatch};
use crate::state::AppState;

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            put(update_product).delete(delete_product),
        )
}

/// List every product.
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store().products().list().await)
}

/// Create a product under a generated ID.
///
/// # Errors
///
/// Returns an error if the body is not a valid product payload.
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProductPatch>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(patch) = payload?;
    let product = state.store().products().create(patch).await;
    tracing::info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Merge the body into an existing product.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has this ID, or an error if
/// the body is not a valid product payload.
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    payload: std::result::Result<Option<Json<ProductPatch>>, JsonRejection>,
) -> Result<Json<Product>> {
    // No body at all is an empty patch
    let patch = payload?.map(|Json(patch)| patch).unwrap_or_default();
    state
        .store()
        .products()
        .update(&id, patch)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("Product"))
}

/// Delete a product. Succeeds whether or not it existed.
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> StatusCode {
    if state.store().products().delete(&id).await {
        tracing::info!(product_id = %id, "Product deleted");
    } else {
        tracing::debug!(product_id = %id, "Delete of unknown product ignored");
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routes::test_support::{seeded_app, send};

    #[tokio::test]
    async fn test_list_seeded() {
        let (app, _) = seeded_app();
        let (status, body) = send(&app, Method::GET, "/api/products", None).await;
        assert_eq!(status, StatusCode::OK);
        let products = body.as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0]["name"], "Bitcoin Cloud Mining");
        assert_eq!(products[1]["category"], "Real Estate");
    }

    #[tokio::test]
    async fn test_create_returns_201_with_id() {
        let (app, store) = seeded_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/products",
            Some(json!({ "name": "Test Fund", "category": "Gold", "price": 1000 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_str().unwrap();
        assert!(!id.is_empty());
        assert_eq!(store.products().list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_update_missing_is_404() {
        let (app, store) = seeded_app();
        let before = store.products().list().await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/products/missing",
            Some(json!({ "status": "Inactive" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
        assert_eq!(store.products().list().await, before);
    }

    #[tokio::test]
    async fn test_unknown_field_rejected() {
        let (app, store) = seeded_app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/products/1",
            Some(json!({ "colour": "gold" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"].as_str().unwrap().contains("colour"));
        assert_eq!(store.products().list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_missing_is_204() {
        let (app, store) = seeded_app();
        let (status, body) = send(&app, Method::DELETE, "/api/products/missing", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_null());
        assert_eq!(store.products().list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_update_without_body_changes_nothing() {
        let (app, store) = seeded_app();
        let before = store.products().list().await;

        let (status, body) = send(&app, Method::PUT, "/api/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Bitcoin Cloud Mining");
        assert_eq!(store.products().list().await, before);

        let (status, body) = send(&app, Method::PUT, "/api/products/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
    }
}
