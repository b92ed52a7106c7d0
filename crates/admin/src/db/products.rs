//! Product repository.

use diverse_capital_core::ProductId;

use super::{Store, remove_where};
use crate::models::{Product, ProductPatch};

/// Repository for product operations.
pub struct ProductRepository<'a> {
    store: &'a Store,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all products in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.store.read().await.products.clone()
    }

    /// Get a product by ID.
    #[cfg(test)]
    pub async fn get(&self, id: &ProductId) -> Option<Product> {
        self.store
            .read()
            .await
            .products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    /// Create a product from a partial payload under a fresh ID.
    ///
    /// The ID is regenerated until it does not collide with an existing
    /// product.
    pub async fn create(&self, patch: ProductPatch) -> Product {
        let mut data = self.store.write().await;

        let id = loop {
            let candidate = ProductId::generate();
            if !data.products.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };

        let product = Product::from_patch(id, patch);
        data.products.push(product.clone());
        product
    }

    /// Merge `patch` into an existing product.
    ///
    /// Returns `None` if no product has this ID.
    pub async fn update(&self, id: &ProductId, patch: ProductPatch) -> Option<Product> {
        let mut data = self.store.write().await;
        let product = data.products.iter_mut().find(|p| &p.id == id)?;
        patch.apply_to(product);
        Some(product.clone())
    }

    /// Delete a product. Returns whether a product was removed.
    pub async fn delete(&self, id: &ProductId) -> bool {
        let mut data = self.store.write().await;
        remove_where(&mut data.products, |p| &p.id == id)
    }
}
