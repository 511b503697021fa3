//! Cart persistence across sessions.
//!
//! The CLI opens a fresh manager per invocation, so every mutation must
//! survive a full reopen of the store.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use stonefruit_core::{Product, ProductId};
use stonefruit_shop::cart::{CartManager, CartStore};

fn product(id: i64, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("product-{id}"),
        price: price.parse().unwrap(),
        description: "from the shelf".to_string(),
        stock: 50,
    }
}

#[test]
fn test_mutations_survive_reopen_per_operation() {
    let dir = tempfile::tempdir().unwrap();

    // Each block is one CLI invocation: open, mutate, drop.
    {
        let mut manager = CartManager::open(CartStore::new(dir.path()));
        manager.add(product(1, "10.00")).unwrap();
    }
    {
        let mut manager = CartManager::open(CartStore::new(dir.path()));
        manager.add(product(1, "10.00")).unwrap();
        manager.add(product(2, "5.50")).unwrap();
    }
    {
        let mut manager = CartManager::open(CartStore::new(dir.path()));
        manager.add(product(3, "0.99")).unwrap();
        manager.remove(ProductId::new(3)).unwrap();
    }

    let manager = CartManager::open(CartStore::new(dir.path()));
    assert_eq!(manager.items().len(), 2);
    assert_eq!(manager.items()[0].quantity, 2);
    assert_eq!(manager.items()[1].quantity, 1);
    assert_eq!(manager.total(), "25.50".parse::<Decimal>().unwrap());
}

#[test]
fn test_reload_reconstructs_equal_items() {
    let dir = tempfile::tempdir().unwrap();

    let mut manager = CartManager::open(CartStore::new(dir.path()));
    manager.add(product(1, "9.99")).unwrap();
    manager.update_quantity(ProductId::new(1), 3).unwrap();
    manager.add(product(2, "4.00")).unwrap();
    let items = manager.items().to_vec();

    let reopened = CartManager::open(CartStore::new(dir.path()));
    assert_eq!(reopened.items(), items.as_slice());
}

#[test]
fn test_malformed_snapshot_is_a_fresh_cart() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::new(dir.path());

    let mut manager = CartManager::open(store.clone());
    manager.add(product(1, "9.99")).unwrap();

    std::fs::write(store.path(), b"not a cart at all").unwrap();

    let manager = CartManager::open(store);
    assert!(manager.is_empty());
}

#[test]
fn test_empty_storage_dir_is_a_fresh_cart() {
    let dir = tempfile::tempdir().unwrap();
    let manager = CartManager::open(CartStore::new(dir.path()));
    assert!(manager.is_empty());
}
