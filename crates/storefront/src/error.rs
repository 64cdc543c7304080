//! Error types for the storefront.
//!
//! Cart operations return `Result<T>` (alias for `Result<T, StoreError>`).
//! Start-up failures are collected in `AppError`.

use shopfront_core::ProductId;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::mirror::MirrorError;

/// Errors from cart and session operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The durable mirror could not be updated. The in-memory cart is unchanged.
    #[error("Cart storage error: {0}")]
    Mirror(#[from] MirrorError),

    /// The product id is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Checkout was requested with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The cart total would exceed the largest representable amount. The
    /// change is rejected and nothing is persisted.
    #[error("Cart total is too large")]
    AmountOverflow,
}

/// Errors that prevent a storefront session from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
