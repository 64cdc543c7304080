//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart survives restarts through the file mirror
//! - `listing` - Filter and sort over the bundled catalog
//!
//! Tests share the helpers below to open sessions against a scratch
//! storage directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use shopfront_storefront::{FileMirror, Storefront, StorefrontConfig};

/// Configuration pointing the cart slot at `dir`, bundled catalog.
#[must_use]
pub fn config_in(dir: &Path) -> StorefrontConfig {
    StorefrontConfig {
        storage_dir: dir.to_path_buf(),
        ..StorefrontConfig::default()
    }
}

/// Open a session as a fresh start of the app would.
///
/// # Panics
///
/// Panics if the bundled catalog fails to load.
#[must_use]
pub fn open_session(dir: &Path) -> Storefront<FileMirror> {
    Storefront::from_config(&config_in(dir)).expect("bundled catalog loads")
}
