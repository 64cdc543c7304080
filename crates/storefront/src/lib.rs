//! Shopfront Storefront library.
//!
//! Everything behind the shopping page, without the page itself:
//!
//! - [`catalog`] - The static product catalog
//! - [`filter`] - Search, category filter and price sort over the catalog
//! - [`cart`] - The cart and its persisted store
//! - [`mirror`] - Durable storage slot for the cart
//! - [`state`] - Per-session state container used by front-ends
//! - [`config`] - Environment configuration
//!
//! # Example
//!
//! ```rust
//! use shopfront_core::ProductId;
//! use shopfront_storefront::catalog::Catalog;
//! use shopfront_storefront::mirror::MemoryMirror;
//! use shopfront_storefront::state::Storefront;
//!
//! let mut store = Storefront::open(Catalog::bundled()?, MemoryMirror::new());
//!
//! let listing = store.set_search("coffee");
//! assert!(!listing.is_empty());
//!
//! store.add_to_cart(&ProductId::new("2"))?;
//! let confirmation = store.checkout()?;
//! assert_eq!(confirmation.total_items, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod mirror;
pub mod state;

pub use cart::{Cart, CartStore, CartSummary, CheckoutConfirmation};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{AppError, StoreError};
pub use filter::{ProductQuery, filter_products, parse_category};
pub use mirror::{CartMirror, FileMirror, MemoryMirror, MirrorError};
pub use state::{Listing, Storefront};
