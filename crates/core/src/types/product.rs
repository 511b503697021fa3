//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductId;

/// A purchasable product as returned by the catalog endpoint.
///
/// Immutable once fetched: the catalog is refetched per session and never
/// updated in place. The backend encodes `price` as a decimal string
/// (e.g., `"19.99"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the store currency's standard unit.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub description: String,
    /// Units available according to the backend at fetch time.
    pub stock: i64,
}
