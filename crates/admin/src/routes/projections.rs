//! ROI projection handler for the crypto mining calculator.

use axum::{
    Json, Router,
    extract::{Query, rejection::QueryRejection},
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use diverse_capital_core::{Amount, RoiProjection};

use crate::error::{AppError, Result};
use crate::state::AppState;

const DEFAULT_AMOUNT: i64 = 5000;
const DEFAULT_MONTHS: u32 = 12;
/// The calculator slider tops out at five years; allow some headroom.
const MAX_MONTHS: u32 = 120;

/// Build the projections router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/projections/crypto", get(crypto_projection))
}

/// Calculator inputs.
#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    pub amount: Option<Amount>,
    pub months: Option<u32>,
}

/// Project a mining investment at the default monthly rate.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a negative amount or a timeframe
/// above the limit.
#[instrument]
pub async fn crypto_projection(
    query: std::result::Result<Query<ProjectionQuery>, QueryRejection>,
) -> Result<Json<RoiProjection>> {
    let Query(query) = query?;
    let amount = query.amount.unwrap_or(Amount::from_units(DEFAULT_AMOUNT));
    let months = query.months.unwrap_or(DEFAULT_MONTHS);

    if amount < Amount::ZERO {
        return Err(AppError::BadRequest("amount must not be negative".to_string()));
    }
    if months > MAX_MONTHS {
        return Err(AppError::BadRequest(format!(
            "months must be at most {MAX_MONTHS}"
        )));
    }

    Ok(Json(RoiProjection::mining(amount, months)))
}
