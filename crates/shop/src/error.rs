//! Unified error type for the CLI boundary.
//!
//! Library modules return their own concrete errors (`ConfigError`,
//! `ApiError`, `StoreError`, `CheckoutError`); the binary folds them into
//! `ShopError` for uniform reporting and exit codes.

use thiserror::Error;

use crate::api::ApiError;
use crate::cart::StoreError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront client.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Local cart storage failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Order placement failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// A referenced product does not exist in the catalog.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Terminal I/O failed (confirmation prompt).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `ShopError`.
pub type Result<T> = std::result::Result<T, ShopError>;
