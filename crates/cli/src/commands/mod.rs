//! Command implementations for the terminal storefront.

pub mod cart;
pub mod shell;

use shopfront_storefront::{AppError, ConfigError, StoreError};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The session could not be started.
    #[error(transparent)]
    App(#[from] AppError),

    /// A cart operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing output or reading input failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::App(AppError::Config(err))
    }
}
