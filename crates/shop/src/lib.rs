//! Stonefruit Shop - client-side storefront.
//!
//! This crate provides the storefront functionality as a library, allowing
//! it to be tested and reused. The `stonefruit` binary is a thin CLI over
//! it: each invocation plays the role of one user action against the
//! persisted cart.
//!
//! # Architecture
//!
//! - [`catalog`] fetches the product list once per session; failures leave
//!   an empty catalog behind a logged error
//! - [`cart`] owns the in-memory cart, mirrored to a local JSON snapshot
//!   after every mutation and reloaded at session start
//! - [`checkout`] drives order submission through an explicit
//!   confirm-before-send state machine; HTTP 201 clears all local state,
//!   anything else leaves it untouched
//! - [`api`] holds the cookie-bearing HTTP client for the two backend
//!   endpoints

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
