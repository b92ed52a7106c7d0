//! Unified error handling for admin.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AppError {
    /// No record with the requested ID. Holds the entity name.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Request body is not valid JSON for the target type.
    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// Query string could not be parsed.
    #[error("Invalid query: {}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// JSON error body: `{ "message": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidBody(rejection) => rejection.status(),
            Self::InvalidQuery(rejection) => rejection.status(),
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");

        (
            status,
            Json(ErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Product");
        assert_eq!(err.to_string(), "Product not found");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        // Test that errors map to correct HTTP status codes
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("Order")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_errors_are_client_errors_with_message_body() {
        for err in [
            AppError::NotFound("Product"),
            AppError::BadRequest("amount must not be negative".to_string()),
        ] {
            let expected = err.to_string();
            let response = err.into_response();
            assert!(response.status().is_client_error());

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, serde_json::json!({ "message": expected }));
        }
    }
}
