//! Core types for Stonefruit.
//!
//! This module provides the domain model for the storefront client.

pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod product;

pub use cart::{Cart, CartItem};
pub use id::*;
pub use order::{OrderLine, OrderRequest};
pub use price::{display_amount, format_amount};
pub use product::Product;
