//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod cart_line;
pub mod id;
pub mod price;
pub mod product;
pub mod sort;

pub use cart_line::CartLine;
pub use id::*;
pub use price::{Price, PriceError, format_amount};
pub use product::Product;
pub use sort::{ParseSortDirectionError, SortDirection};
