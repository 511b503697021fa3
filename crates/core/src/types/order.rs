//! Order submission payload.
//!
//! An order is a one-shot structure built from the cart at submission time.
//! It is never persisted locally: on an acknowledged success the cart it was
//! built from is cleared, and on failure it is simply dropped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::price;
use crate::{Cart, ProductId};

/// One line of an order: a cart item reduced to id, quantity, and unit price.
///
/// The backend expects `price` as a JSON number, unlike the catalog which
/// encodes prices as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// The order payload sent to `POST /api/order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: String,
    pub delivery_address: String,
    pub items: Vec<OrderLine>,
    /// Grand total, formatted to two decimal places.
    pub total: String,
}

impl OrderRequest {
    /// Build an order from the current cart state.
    ///
    /// The total is computed from the cart and rounded to two decimal places
    /// as sent to the server.
    #[must_use]
    pub fn from_cart(customer_name: &str, delivery_address: &str, cart: &Cart) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                product_id: item.product.id,
                quantity: item.quantity,
                price: item.product.price,
            })
            .collect();

        Self {
            customer_name: customer_name.to_string(),
            delivery_address: delivery_address.to_string(),
            items,
            total: price::format_amount(cart.total()),
        }
    }
}
