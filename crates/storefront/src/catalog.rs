//! Static product catalog.
//!
//! The catalog is loaded once at startup, validated, and never refreshed
//! during a session. A default asset is compiled into the binary; an
//! override file can be supplied through configuration.

use std::collections::HashSet;
use std::path::Path;

use shopfront_core::{Product, ProductId};
use thiserror::Error;

/// Catalog asset bundled at build time.
const BUNDLED_CATALOG: &str = include_str!("../data/items.json");

/// Errors that can occur while loading a catalog asset.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The asset file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The asset is not a JSON array of products (includes negative prices).
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}

/// An immutable, validated sequence of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled asset is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load a catalog asset from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or a parse or
    /// validation error for its contents.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Parse and validate a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed data and
    /// `CatalogError::DuplicateId` if an id appears twice.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Build a catalog from already-parsed products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if an id appears twice.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct category names in the order they first appear.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
