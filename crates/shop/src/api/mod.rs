//! Backend API client.
//!
//! The backend exposes exactly two endpoints, both relative to the
//! configured base URL:
//!
//! - `GET {base}/api/products` - the product catalog
//! - `POST {base}/api/order` - order submission (success iff HTTP 201)
//!
//! Requests carry credentials via a cookie store on the underlying
//! `reqwest` client. Neither call is retried and no timeout is enforced.

mod client;

pub use client::ApiClient;

use thiserror::Error;

/// Errors that can occur when talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not parse as the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend answered with a status the operation does not accept.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        /// Truncated response body, for diagnostics.
        body: String,
    },
}
