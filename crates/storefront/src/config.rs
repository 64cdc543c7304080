//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPFRONT_STORAGE_DIR` - Directory holding the cart slot (default: `.shopfront`)
//! - `SHOPFRONT_CART_KEY` - Cart slot name (default: `cartItems`)
//! - `SHOPFRONT_CATALOG` - Path to a catalog JSON file replacing the bundled catalog

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::mirror::{DEFAULT_CART_KEY, FileMirror};

const DEFAULT_STORAGE_DIR: &str = ".shopfront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the durable cart slot
    pub storage_dir: PathBuf,
    /// Name of the cart slot inside `storage_dir`
    pub cart_key: String,
    /// Catalog override; `None` uses the bundled catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(get_optional_env)
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_dir = PathBuf::from(get_or_default(
            &lookup,
            "SHOPFRONT_STORAGE_DIR",
            DEFAULT_STORAGE_DIR,
        ));
        let cart_key = get_or_default(&lookup, "SHOPFRONT_CART_KEY", DEFAULT_CART_KEY);
        validate_cart_key(&cart_key, "SHOPFRONT_CART_KEY")?;
        let catalog_path = lookup("SHOPFRONT_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            storage_dir,
            cart_key,
            catalog_path,
        })
    }

    /// Full path of the cart slot file.
    #[must_use]
    pub fn cart_slot_path(&self) -> PathBuf {
        self.mirror().path().to_path_buf()
    }

    /// File-backed mirror for the configured slot.
    #[must_use]
    pub fn mirror(&self) -> FileMirror {
        FileMirror::new(&self.storage_dir, &self.cart_key)
    }

    /// Load the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the override file or bundled asset is invalid.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        self.catalog_path
            .as_deref()
            .map_or_else(Catalog::bundled, Catalog::load)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Validate that a slot name is safe to use as a file stem.
fn validate_cart_key(key: &str, var_name: &str) -> Result<(), ConfigError> {
    if key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Ok(());
    }
    Err(ConfigError::InvalidEnvVar(
        var_name.to_string(),
        format!("'{key}' may only contain ASCII letters, digits, '-' and '_'"),
    ))
}
