//! Catalog product records.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable product from the catalog.
///
/// Products are immutable once loaded. Field names follow the catalog asset
/// (`productName`, `unitPrice`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name, also the field searched by the listing filter.
    pub product_name: String,
    pub description: String,
    /// Category name (e.g. `groceries`, `gadgets`).
    pub category: String,
    pub unit_price: Price,
    /// Reference to the display image.
    pub image_url: String,
}

impl Product {
    /// Whether the product name contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn name_contains_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.product_name.to_lowercase().contains(needle)
    }

    /// Whether the product belongs to `category` (exact match).
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
