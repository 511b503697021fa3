//! Integration tests for Stonefruit.
//!
//! The tests drive the real `ApiClient`, cart manager, and checkout flow
//! against [`MockBackend`], an in-process axum server bound to an ephemeral
//! port that implements the two backend endpoints:
//!
//! - `GET /api/products` - answers with a canned catalog payload
//! - `POST /api/order` - records the received body and answers with a
//!   configured status
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stonefruit-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

/// Shared state handed to the mock route handlers.
#[derive(Clone)]
struct BackendState {
    products: Value,
    order_status: StatusCode,
    received_orders: Arc<Mutex<Vec<Value>>>,
}

/// An in-process stand-in for the storefront backend.
pub struct MockBackend {
    base_url: String,
    received_orders: Arc<Mutex<Vec<Value>>>,
}

impl MockBackend {
    /// Spawn the backend on an ephemeral local port.
    ///
    /// `products` is returned verbatim from `GET /api/products`;
    /// `order_status` is the answer to every `POST /api/order`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound (test environment only).
    pub async fn spawn(products: Value, order_status: StatusCode) -> Self {
        let received_orders = Arc::new(Mutex::new(Vec::new()));
        let state = BackendState {
            products,
            order_status,
            received_orders: Arc::clone(&received_orders),
        };

        let app = Router::new()
            .route("/api/products", get(products_handler))
            .route("/api/order", post(order_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock backend server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            received_orders,
        }
    }

    /// Base URL to point an `ApiClient` at.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every order body received so far, in arrival order.
    #[must_use]
    pub fn received_orders(&self) -> Vec<Value> {
        self.received_orders
            .lock()
            .expect("order log lock poisoned")
            .clone()
    }
}

async fn products_handler(State(state): State<BackendState>) -> Json<Value> {
    Json(state.products)
}

async fn order_handler(State(state): State<BackendState>, Json(body): Json<Value>) -> StatusCode {
    state
        .received_orders
        .lock()
        .expect("order log lock poisoned")
        .push(body);
    state.order_status
}
