//! Dashboard statistics handler.

use axum::{Json, Router, extract::State, routing::get};
use tracing::instrument;

use crate::models::AdminDashboardStats;
use crate::state::AppState;

/// Build the stats router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/stats", get(dashboard_stats))
}

/// Headline numbers for the admin dashboard.
#[instrument(skip(state))]
pub async fn dashboard_stats(State(state): State<AppState>) -> Json<AdminDashboardStats> {
    Json(state.store().dashboard_stats().await)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routes::test_support::{seeded_app, send};

    #[tokio::test]
    async fn test_stats_follow_mutations() {
        let (app, _) = seeded_app();

        let (status, body) = send(&app, Method::GET, "/api/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalProducts"], 2);
        assert_eq!(body["totalRevenue"], 5000);
        assert_eq!(body["pendingOrders"], 0);

        send(
            &app,
            Method::PUT,
            "/api/orders/1",
            Some(json!({ "status": "Cancelled" })),
        )
        .await;

        let (_, body) = send(&app, Method::GET, "/api/stats", None).await;
        assert_eq!(body["totalOrders"], 1);
        assert_eq!(body["totalRevenue"], 0);
    }
}
