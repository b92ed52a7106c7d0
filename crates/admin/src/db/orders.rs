//! Order repository.

use diverse_capital_core::OrderId;

use super::Store;
use crate::models::{Order, OrderPatch};

/// Repository for order operations.
pub struct OrderRepository<'a> {
    store: &'a Store,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all orders in insertion order.
    pub async fn list(&self) -> Vec<Order> {
        self.store.read().await.orders.clone()
    }

    /// Get an order by ID.
    #[cfg(test)]
    pub async fn get(&self, id: &OrderId) -> Option<Order> {
        self.store
            .read()
            .await
            .orders
            .iter()
            .find(|o| &o.id == id)
            .cloned()
    }

    /// Insert an order as-is. Referenced users and products are not checked.
    #[cfg(test)]
    pub async fn insert(&self, order: Order) {
        self.store.write().await.orders.push(order);
    }

    /// Merge `patch` into an existing order.
    ///
    /// Returns `None` if no order has this ID.
    pub async fn update(&self, id: &OrderId, patch: OrderPatch) -> Option<Order> {
        let mut data = self.store.write().await;
        let order = data.orders.iter_mut().find(|o| &o.id == id)?;
        patch.apply_to(order);
        Some(order.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use diverse_capital_core::{Amount, OrderStatus, ProductId, UserId};

    use super::*;

    #[tokio::test]
    async fn test_orders_survive_product_and_user_deletion() {
        let store = Store::seeded();
        store.products().delete(&ProductId::new("1")).await;
        store.users().delete(&UserId::new("1")).await;

        let order = store.orders().get(&OrderId::new("1")).await.unwrap();
        assert_eq!(order.product_id.as_str(), "1");
        assert_eq!(order.user_id.as_str(), "1");
    }

    #[tokio::test]
    async fn test_insert_does_not_check_references() {
        let store = Store::empty();
        store
            .orders()
            .insert(Order {
                id: OrderId::new("o1"),
                user_id: UserId::new("ghost"),
                product_id: ProductId::new("ghost"),
                amount: Amount::from_units(10),
                status: OrderStatus::Pending,
                date: Utc::now(),
                customer_name: String::new(),
                product_name: String::new(),
            })
            .await;

        assert_eq!(store.orders().list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_status() {
        let store = Store::seeded();
        let updated = store
            .orders()
            .update(
                &OrderId::new("1"),
                OrderPatch {
                    status: Some(OrderStatus::Cancelled),
                    ..OrderPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Cancelled);
        assert_eq!(updated.amount, Amount::from_units(5000));
        assert!(
            store
                .orders()
                .update(&OrderId::new("404"), OrderPatch::default())
                .await
                .is_none()
        );
    }
}
