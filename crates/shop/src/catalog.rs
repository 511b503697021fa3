//! Session product catalog.
//!
//! The catalog is fetched once at session start and is read-only
//! afterwards. A failed fetch is logged and leaves the catalog empty; there
//! is no retry and no error state for callers to handle.

use tracing::{debug, instrument};

use stonefruit_core::{Product, ProductId};

use crate::api::ApiClient;

/// The list of purchasable products retrieved from the backend.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Fetch the catalog from the backend.
    ///
    /// On failure the error is logged and an empty catalog is returned.
    #[instrument(skip(client))]
    pub async fn load(client: &ApiClient) -> Self {
        match client.fetch_products().await {
            Ok(products) => {
                debug!(count = products.len(), "catalog loaded");
                Self { products }
            }
            Err(e) => {
                tracing::error!("Failed to load catalog: {e}");
                Self::default()
            }
        }
    }

    /// All products, in backend order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}
