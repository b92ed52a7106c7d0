//! ROI projections for the sector landing pages.
//!
//! The crypto mining page lets visitors drag an investment amount and a
//! timeframe and shows the compounded outcome. The formula lives here so the
//! API and any front end agree on the numbers.

use serde::Serialize;

use crate::types::Amount;

/// Monthly return assumed for cloud mining (2.1%).
pub const DEFAULT_MINING_MONTHLY_RATE: f64 = 0.021;

/// Result of compounding a principal over a number of months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub principal: f64,
    pub months: u32,
    pub monthly_rate: f64,
    /// Principal plus compounded returns.
    pub total: f64,
    pub profit: f64,
    /// Profit as a percentage of the principal.
    pub percentage: f64,
}

impl RoiProjection {
    /// Compound `principal` monthly at `monthly_rate` for `months` months.
    #[must_use]
    pub fn compound(principal: Amount, months: u32, monthly_rate: f64) -> Self {
        let principal = principal.to_f64();
        let exponent = i32::try_from(months).unwrap_or(i32::MAX);
        let total = principal * (1.0 + monthly_rate).powi(exponent);
        let profit = total - principal;
        let percentage = if principal == 0.0 {
            0.0
        } else {
            profit / principal * 100.0
        };

        Self {
            principal,
            months,
            monthly_rate,
            total,
            profit,
            percentage,
        }
    }

    /// Projection using the default mining rate.
    #[must_use]
    pub fn mining(principal: Amount, months: u32) -> Self {
        Self::compound(principal, months, DEFAULT_MINING_MONTHLY_RATE)
    }
}
