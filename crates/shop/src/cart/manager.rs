//! The cart manager: in-memory cart plus write-through persistence.

use rust_decimal::Decimal;

use stonefruit_core::{Cart, CartItem, Product, ProductId};

use super::store::{CartStore, StoreError};

/// Exclusive owner of the session's cart.
///
/// Every effective mutation is followed by a snapshot write; rejected or
/// no-op mutations leave the snapshot alone. The cart is reconstructed from
/// the snapshot when the manager is opened.
#[derive(Debug)]
pub struct CartManager {
    cart: Cart,
    store: CartStore,
}

impl CartManager {
    /// Open the cart, reconstructing any saved state from storage.
    #[must_use]
    pub fn open(store: CartStore) -> Self {
        let cart = store.load();
        Self { cart, store }
    }

    /// Add one unit of `product` and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn add(&mut self, product: Product) -> Result<(), StoreError> {
        self.cart.add(product);
        self.store.save(&self.cart)
    }

    /// Set the quantity of a cart line and persist if it changed.
    ///
    /// Quantities below 1 and unknown ids are rejected without touching
    /// either the cart or the snapshot. Returns whether the cart changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> Result<bool, StoreError> {
        if self.cart.update_quantity(id, quantity) {
            self.store.save(&self.cart)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Remove a cart line and persist if it was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn remove(&mut self, id: ProductId) -> Result<bool, StoreError> {
        if self.cart.remove(id) {
            self.store.save(&self.cart)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Empty the cart and remove the snapshot (successful order placement).
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be removed.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.store.clear()
    }

    /// The current cart state.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Current grand total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}
