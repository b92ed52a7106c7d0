//! Site settings API handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use tracing::instrument;

use crate::error::Result;
use crate::models::{SiteSettings, SiteSettingsPatch};
use crate::state::AppState;

/// Build the settings router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/settings", get(get_settings).put(update_settings))
}

/// Get the site settings.
#[instrument(skip(state))]
pub async fn get_settings(State(state): State<AppState>) -> Json<SiteSettings> {
    Json(state.store().settings().get().await)
}

/// Merge the body into the site settings.
///
/// # Errors
///
/// Returns an error if the body is not a valid settings payload.
#[instrument(skip(state, payload))]
pub async fn update_settings(
    State(state): State<AppState>,
    payload: std::result::Result<Option<Json<SiteSettingsPatch>>, JsonRejection>,
) -> Result<Json<SiteSettings>> {
    // No body at all is an empty patch
    let patch = payload?.map(|Json(patch)| patch).unwrap_or_default();
    let settings = state.store().settings().update(patch).await;
    tracing::info!("Site settings updated");
    Ok(Json(settings))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routes::test_support::{seeded_app, send};

    #[tokio::test]
    async fn test_update_is_a_merge() {
        let (app, _) = seeded_app();
        let (_, before) = send(&app, Method::GET, "/api/settings", None).await;

        let (status, after) = send(
            &app,
            Method::PUT,
            "/api/settings",
            Some(json!({ "contactEmail": "x" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(after["contactEmail"], "x");
        assert_eq!(after["bankName"], before["bankName"]);
        assert_eq!(after["accountNumber"], "1234567890");
        assert_eq!(after["footerContent"], before["footerContent"]);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_422() {
        let (app, _) = seeded_app();
        let response = send(
            &app,
            Method::PUT,
            "/api/settings",
            Some(json!("not an object")),
        )
        .await;
        assert_eq!(response.0, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_without_body_keeps_settings() {
        let (app, _) = seeded_app();
        let (_, before) = send(&app, Method::GET, "/api/settings", None).await;

        let (status, after) = send(&app, Method::PUT, "/api/settings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(after, before);
    }
}
