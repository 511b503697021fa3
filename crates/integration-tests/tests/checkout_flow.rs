//! End-to-end checkout tests against the mock backend.
//!
//! These cover the order-submission contract: HTTP 201 clears the cart,
//! the snapshot, and the customer fields; any other outcome leaves every
//! piece of local state exactly as it was.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use stonefruit_core::ProductId;
use stonefruit_integration_tests::MockBackend;
use stonefruit_shop::api::ApiClient;
use stonefruit_shop::cart::{CartManager, CartStore};
use stonefruit_shop::catalog::Catalog;
use stonefruit_shop::checkout::{Checkout, CheckoutError, CheckoutState};

fn catalog_payload() -> serde_json::Value {
    json!({
        "products": [
            {
                "id": 1,
                "name": "Flat White Peach",
                "price": "9.99",
                "description": "A box of donut peaches",
                "stock": 20
            },
            {
                "id": 2,
                "name": "Greengage Jam",
                "price": "4.00",
                "description": "Small batch",
                "stock": 7
            }
        ]
    })
}

/// Build the scenario cart: product 1 at quantity 3, product 2 at quantity 1.
async fn fill_cart(backend: &MockBackend, manager: &mut CartManager) {
    let client = ApiClient::new(backend.base_url()).unwrap();
    let catalog = Catalog::load(&client).await;

    manager
        .add(catalog.find(ProductId::new(1)).unwrap().clone())
        .unwrap();
    manager.update_quantity(ProductId::new(1), 3).unwrap();
    manager
        .add(catalog.find(ProductId::new(2)).unwrap().clone())
        .unwrap();
}

#[tokio::test]
async fn test_order_acknowledged_clears_all_local_state() {
    let backend = MockBackend::spawn(catalog_payload(), StatusCode::CREATED).await;
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::new(dir.path());
    let mut manager = CartManager::open(store.clone());
    fill_cart(&backend, &mut manager).await;

    let client = ApiClient::new(backend.base_url()).unwrap();
    let mut checkout = Checkout::new();
    checkout
        .begin("Ada Lovelace", "1 Analytical Way", manager.cart())
        .unwrap();

    checkout.submit(&client, &mut manager).await.unwrap();

    assert!(manager.is_empty());
    assert!(!store.path().exists());
    assert_eq!(checkout.customer_name(), "");
    assert_eq!(checkout.delivery_address(), "");
    assert_eq!(checkout.state(), CheckoutState::Idle);

    // A fresh session sees no saved cart either
    assert!(CartManager::open(store).is_empty());
}

#[tokio::test]
async fn test_order_wire_format() {
    let backend = MockBackend::spawn(catalog_payload(), StatusCode::CREATED).await;
    let dir = tempfile::tempdir().unwrap();
    let mut manager = CartManager::open(CartStore::new(dir.path()));
    fill_cart(&backend, &mut manager).await;

    let client = ApiClient::new(backend.base_url()).unwrap();
    let mut checkout = Checkout::new();
    checkout
        .begin("Ada Lovelace", "1 Analytical Way", manager.cart())
        .unwrap();
    checkout.submit(&client, &mut manager).await.unwrap();

    let orders = backend.received_orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(
        orders[0],
        json!({
            "customerName": "Ada Lovelace",
            "deliveryAddress": "1 Analytical Way",
            "items": [
                { "product_id": 1, "quantity": 3, "price": 9.99 },
                { "product_id": 2, "quantity": 1, "price": 4.0 }
            ],
            "total": "33.97"
        })
    );
}

#[tokio::test]
async fn test_order_rejected_preserves_all_local_state() {
    let backend = MockBackend::spawn(catalog_payload(), StatusCode::INTERNAL_SERVER_ERROR).await;
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::new(dir.path());
    let mut manager = CartManager::open(store.clone());
    fill_cart(&backend, &mut manager).await;

    let cart_before = manager.cart().clone();
    let snapshot_before = std::fs::read(store.path()).unwrap();

    let client = ApiClient::new(backend.base_url()).unwrap();
    let mut checkout = Checkout::new();
    checkout
        .begin("Ada Lovelace", "1 Analytical Way", manager.cart())
        .unwrap();

    let result = checkout.submit(&client, &mut manager).await;
    assert!(matches!(result, Err(CheckoutError::Api(_))));

    assert_eq!(manager.cart(), &cart_before);
    assert_eq!(std::fs::read(store.path()).unwrap(), snapshot_before);
    assert_eq!(checkout.customer_name(), "Ada Lovelace");
    assert_eq!(checkout.state(), CheckoutState::Idle);
}

#[tokio::test]
async fn test_order_bad_request_preserves_all_local_state() {
    let backend = MockBackend::spawn(catalog_payload(), StatusCode::BAD_REQUEST).await;
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::new(dir.path());
    let mut manager = CartManager::open(store.clone());
    fill_cart(&backend, &mut manager).await;

    let snapshot_before = std::fs::read(store.path()).unwrap();

    let client = ApiClient::new(backend.base_url()).unwrap();
    let mut checkout = Checkout::new();
    checkout
        .begin("Ada Lovelace", "1 Analytical Way", manager.cart())
        .unwrap();

    assert!(checkout.submit(&client, &mut manager).await.is_err());
    assert_eq!(manager.items().len(), 2);
    assert_eq!(std::fs::read(store.path()).unwrap(), snapshot_before);
}

#[tokio::test]
async fn test_declined_confirmation_sends_nothing() {
    let backend = MockBackend::spawn(catalog_payload(), StatusCode::CREATED).await;
    let dir = tempfile::tempdir().unwrap();
    let mut manager = CartManager::open(CartStore::new(dir.path()));
    fill_cart(&backend, &mut manager).await;

    let client = ApiClient::new(backend.base_url()).unwrap();
    let mut checkout = Checkout::new();
    checkout
        .begin("Ada Lovelace", "1 Analytical Way", manager.cart())
        .unwrap();
    checkout.decline();

    // Declined means no submission is possible without a fresh confirmation
    let result = checkout.submit(&client, &mut manager).await;
    assert!(matches!(result, Err(CheckoutError::NotConfirmed)));
    assert!(backend.received_orders().is_empty());
    assert_eq!(manager.items().len(), 2);
}

#[tokio::test]
async fn test_catalog_missing_products_field_is_empty() {
    let backend = MockBackend::spawn(json!({}), StatusCode::CREATED).await;
    let client = ApiClient::new(backend.base_url()).unwrap();

    let catalog = Catalog::load(&client).await;
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn test_catalog_loads_products() {
    let backend = MockBackend::spawn(catalog_payload(), StatusCode::CREATED).await;
    let client = ApiClient::new(backend.base_url()).unwrap();

    let catalog = Catalog::load(&client).await;
    assert_eq!(catalog.products().len(), 2);
    assert_eq!(catalog.products()[0].name, "Flat White Peach");
    assert_eq!(
        catalog.products()[0].price,
        "9.99".parse::<rust_decimal::Decimal>().unwrap()
    );
}

#[tokio::test]
async fn test_catalog_unreachable_backend_is_empty() {
    // Nothing listens on port 9 (discard)
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let catalog = Catalog::load(&client).await;
    assert!(catalog.is_empty());
}
