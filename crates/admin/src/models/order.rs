//! Investment orders placed by users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use diverse_capital_core::{Amount, OrderId, OrderStatus, ProductId, UserId};

use super::merge_fields;

/// An order linking a user to a product.
///
/// `user_id` and `product_id` are informal references: nothing checks that
/// they exist, and deleting a user or product leaves its orders in place.
/// `customer_name` and `product_name` are copies taken when the order was
/// placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub amount: Amount,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
    pub customer_name: String,
    pub product_name: String,
}

/// Partial order update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderPatch {
    /// Accepted so clients can send a full record back; never applied.
    pub id: Option<OrderId>,
    pub user_id: Option<UserId>,
    pub product_id: Option<ProductId>,
    pub amount: Option<Amount>,
    pub status: Option<OrderStatus>,
    pub date: Option<DateTime<Utc>>,
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
}

impl OrderPatch {
    /// Overwrite the provided fields on `order`.
    pub fn apply_to(self, order: &mut Order) {
        merge_fields!(self => order;
            user_id,
            product_id,
            amount,
            status,
            date,
            customer_name,
            product_name,
        );
    }
}
