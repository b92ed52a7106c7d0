//! Dashboard aggregates.

use serde::Serialize;

use diverse_capital_core::{Amount, OrderStatus};

use super::{Order, Product, User};

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardStats {
    pub total_users: usize,
    pub total_orders: usize,
    pub total_products: usize,
    /// Sum of order amounts, excluding cancelled orders.
    pub total_revenue: Amount,
    pub pending_orders: usize,
}

impl AdminDashboardStats {
    /// Aggregate the current collections.
    #[must_use]
    pub fn compute(products: &[Product], users: &[User], orders: &[Order]) -> Self {
        Self {
            total_users: users.len(),
            total_orders: orders.len(),
            total_products: products.len(),
            total_revenue: orders
                .iter()
                .filter(|o| o.status.counts_as_revenue())
                .map(|o| o.amount)
                .sum(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
        }
    }
}
