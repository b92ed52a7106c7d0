//! Investment products listed on the site.

use serde::{Deserialize, Serialize};

use diverse_capital_core::{Amount, ProductCategory, ProductId, ProductStatus};

use super::merge_fields;

/// An investment product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Amount,
    /// Sector; absent when a product was created without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    /// Hero image URL.
    pub image: String,
    /// Advertised return, free text (e.g. "18.4%").
    pub roi: String,
    pub status: ProductStatus,
    /// Listed on the home page.
    pub show_on_home: bool,
    pub is_featured: bool,
    pub min_investment: Amount,
    /// Free text (e.g. "12 Months").
    pub maturity_period: String,
}

impl Product {
    /// An empty active product with the given ID.
    #[must_use]
    pub fn blank(id: ProductId) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            price: Amount::ZERO,
            category: None,
            image: String::new(),
            roi: String::new(),
            status: ProductStatus::Active,
            show_on_home: false,
            is_featured: false,
            min_investment: Amount::ZERO,
            maturity_period: String::new(),
        }
    }

    /// Build a product from a creation payload. Missing fields keep the
    /// [`Product::blank`] defaults.
    #[must_use]
    pub fn from_patch(id: ProductId, patch: ProductPatch) -> Self {
        let mut product = Self::blank(id);
        patch.apply_to(&mut product);
        product
    }
}

/// Partial product, used both for creation and for updates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductPatch {
    /// Accepted so clients can send a full record back; never applied.
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Amount>,
    pub category: Option<ProductCategory>,
    pub image: Option<String>,
    pub roi: Option<String>,
    pub status: Option<ProductStatus>,
    pub show_on_home: Option<bool>,
    pub is_featured: Option<bool>,
    pub min_investment: Option<Amount>,
    pub maturity_period: Option<String>,
}

impl ProductPatch {
    /// Overwrite the provided fields on `product`.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(category) = self.category {
            product.category = Some(category);
        }
        merge_fields!(self => product;
            name,
            description,
            price,
            image,
            roi,
            status,
            show_on_home,
            is_featured,
            min_investment,
            maturity_period,
        );
    }
}
