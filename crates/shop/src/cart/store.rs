//! Durable local storage for the cart snapshot.
//!
//! One key, one file: the serialized sequence of cart items lives at
//! `<storage dir>/cart.json`. The snapshot is read once at session start
//! and rewritten after every cart mutation; a successful order placement
//! removes it entirely.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use stonefruit_core::Cart;

/// The single storage key holding the cart snapshot.
const CART_KEY: &str = "cart";

/// Errors that can occur when writing or clearing the snapshot.
///
/// Loading never fails: a missing or malformed snapshot is treated as "no
/// saved cart".
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("cart storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot could not be encoded.
    #[error("failed to encode cart snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed storage for the cart snapshot.
#[derive(Debug, Clone)]
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// Storage rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{CART_KEY}.json")),
        }
    }

    /// Load the saved cart, if any.
    ///
    /// A missing file means no saved cart. A snapshot that fails to read or
    /// parse is logged and ignored rather than treated as a hard failure.
    #[must_use]
    pub fn load(&self) -> Cart {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Cart::new(),
            Err(e) => {
                warn!(path = %self.path.display(), "Failed to read cart snapshot: {e}");
                return Cart::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(cart) => cart,
            Err(e) => {
                warn!(path = %self.path.display(), "Ignoring malformed cart snapshot: {e}");
                Cart::new()
            }
        }
    }

    /// Rewrite the snapshot with the current cart state.
    ///
    /// Creates the storage directory on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(cart)?)?;
        Ok(())
    }

    /// Remove the snapshot entirely.
    ///
    /// Clearing an absent snapshot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
