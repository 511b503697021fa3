//! HTTP client for the two backend endpoints.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use stonefruit_core::{OrderRequest, Product};

use super::ApiError;

/// How much of an error response body to keep for diagnostics.
const BODY_EXCERPT_LEN: usize = 200;

/// Client for the storefront backend.
///
/// Cheaply cloneable; the inner `reqwest` client keeps a cookie store so
/// both calls go out in the credentialed (cookie-bearing) request mode.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Fetch the product catalog.
    ///
    /// An absent `products` field in the response is treated as an empty
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// malformed response body.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        #[derive(Debug, Default, Deserialize)]
        struct ProductsResponse {
            #[serde(default)]
            products: Vec<Product>,
        }

        let url = format!("{}/api/products", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %excerpt(&body),
                "products request returned non-success status"
            );
            return Err(ApiError::UnexpectedStatus {
                status,
                body: excerpt(&body),
            });
        }

        let parsed: ProductsResponse = serde_json::from_str(&body)?;
        debug!(count = parsed.products.len(), "fetched product catalog");
        Ok(parsed.products)
    }

    /// Submit an order.
    ///
    /// The backend acknowledges a placed order with HTTP 201; any other
    /// status is a failure.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-201 status.
    #[instrument(skip(self, order), fields(items = order.items.len(), total = %order.total))]
    pub async fn create_order(&self, order: &OrderRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/order", self.inner.base_url);
        let response = self.inner.client.post(&url).json(order).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %excerpt(&body),
                "order request was not acknowledged"
            );
            return Err(ApiError::UnexpectedStatus {
                status,
                body: excerpt(&body),
            });
        }

        debug!("order acknowledged");
        Ok(())
    }
}

/// Truncate a response body for logs and error messages.
fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_LEN).collect()
}
