//! The shopping cart and its pure operations.
//!
//! The cart is an ordered sequence of [`CartItem`] with at most one item per
//! product id. All mutation goes through [`Cart::add`],
//! [`Cart::update_quantity`], and [`Cart::remove`]; each reports whether the
//! cart actually changed so callers can skip persistence on no-ops.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Product, ProductId};

/// A product in the cart together with the selected quantity.
///
/// Invariant: `quantity >= 1`. An item that would drop below one unit is
/// removed rather than kept at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The shopper's pending selection, held client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// If the product is already in the cart its quantity is incremented by
    /// 1; otherwise a new item with quantity 1 is appended at the end.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Set the quantity of the item with the given product id.
    ///
    /// Quantities below 1 are rejected without touching the cart. An unknown
    /// id is a silent no-op. Returns `true` if the stored quantity changed.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.items.iter_mut().find(|i| i.product.id == id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove the item with the given product id, if present.
    ///
    /// Idempotent: removing an absent id is a no-op. Returns `true` if an
    /// item was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product.id != id);
        self.items.len() != before
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit price x quantity` over all items. Empty cart yields 0.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines (for the cart badge).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
