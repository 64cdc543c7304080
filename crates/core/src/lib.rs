//! Shopfront Core - Shared types library.
//!
//! This crate provides common types used across all Shopfront components:
//! - `storefront` - Catalog, listing filter and persisted cart
//! - `cli` - Terminal front-end for browsing and checkout
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product and cart records, type-safe IDs, prices and sort order

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
