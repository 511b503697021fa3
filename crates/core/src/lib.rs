//! Stonefruit Core - Shared types library.
//!
//! This crate provides the domain types used across the Stonefruit
//! components:
//! - `shop` - The storefront client (catalog, cart, checkout)
//! - `integration-tests` - End-to-end tests against a mock backend
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no HTTP
//! clients, no filesystem access. Everything that touches the outside world
//! lives in the `shop` crate.
//!
//! # Modules
//!
//! - [`types`] - Ids, products, the cart and its operations, order payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
