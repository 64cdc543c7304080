//! Cart line records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// One product in the cart together with its quantity.
///
/// All product fields are copied by value when the line is created, so a
/// persisted cart can be rendered without the catalog. The serialized shape
/// is the product record plus a `quantity` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ProductId,
    pub product_name: String,
    pub description: String,
    pub category: String,
    pub unit_price: Price,
    pub image_url: String,
    /// Always present. May be zero: lines are only removed by clearing the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line with quantity 1 from a snapshot of `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            product_name: product.product_name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            unit_price: product.unit_price,
            image_url: product.image_url.clone(),
            quantity: 1,
        }
    }

    /// Add one unit.
    pub const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Remove one unit if any remain.
    ///
    /// Returns `false` (and leaves the line untouched) at quantity zero.
    pub const fn decrement(&mut self) -> bool {
        if self.quantity == 0 {
            return false;
        }
        self.quantity -= 1;
        true
    }

    /// `unit_price * quantity`, unrounded. `None` on overflow.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.line_total(self.quantity)
    }
}
