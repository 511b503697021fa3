//! Order submission flow.
//!
//! Submission runs through an explicit state machine:
//!
//! ```text
//! Idle -> Confirming -> Submitting -> { success: cleared | failure: unchanged } -> Idle
//! ```
//!
//! [`Checkout::begin`] validates the order and moves to `Confirming`; the
//! caller must then either [`Checkout::decline`] (no network call, no side
//! effect) or [`Checkout::submit`]. Submitting consumes the confirmation,
//! so a second submission attempt without a fresh confirmed `begin` is
//! rejected - that is the guard against accidental duplicate orders.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, instrument};

use stonefruit_core::{Cart, OrderRequest};

use crate::api::{ApiClient, ApiError};
use crate::cart::{CartManager, StoreError};

/// Where the checkout flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    /// No order in progress.
    #[default]
    Idle,
    /// Order built and awaiting the shopper's explicit yes/no.
    Confirming,
    /// Request in flight.
    Submitting,
}

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Orders require at least one cart item.
    #[error("the cart is empty")]
    EmptyCart,

    /// Customer name was blank.
    #[error("customer name must not be blank")]
    MissingCustomerName,

    /// Delivery address was blank.
    #[error("delivery address must not be blank")]
    MissingDeliveryAddress,

    /// `begin` while an order is already confirming or in flight.
    #[error("an order is already in progress")]
    AlreadyInProgress,

    /// `submit` without a confirmed order.
    #[error("no confirmed order to submit")]
    NotConfirmed,

    /// The backend rejected the order or was unreachable.
    #[error("order submission failed: {0}")]
    Api(#[from] ApiError),

    /// Clearing local state after an acknowledged order failed.
    #[error("cart storage error: {0}")]
    Store(#[from] StoreError),
}

/// Summary shown to the shopper before they confirm the charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPreview {
    /// Total number of units in the order.
    pub item_count: u64,
    /// Grand total that will be charged.
    pub total: Decimal,
}

/// The checkout flow: submission state plus the customer form fields.
#[derive(Debug, Default)]
pub struct Checkout {
    state: CheckoutState,
    customer_name: String,
    delivery_address: String,
}

impl Checkout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    /// Validate the order and move to `Confirming`.
    ///
    /// No network traffic happens here; the returned preview is what the
    /// shopper confirms or declines.
    ///
    /// # Errors
    ///
    /// Rejects an empty cart, blank customer fields, and re-entry while an
    /// order is already confirming or in flight.
    pub fn begin(
        &mut self,
        customer_name: &str,
        delivery_address: &str,
        cart: &Cart,
    ) -> Result<OrderPreview, CheckoutError> {
        if self.state != CheckoutState::Idle {
            return Err(CheckoutError::AlreadyInProgress);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if customer_name.trim().is_empty() {
            return Err(CheckoutError::MissingCustomerName);
        }
        if delivery_address.trim().is_empty() {
            return Err(CheckoutError::MissingDeliveryAddress);
        }

        self.customer_name = customer_name.trim().to_string();
        self.delivery_address = delivery_address.trim().to_string();
        self.state = CheckoutState::Confirming;

        Ok(OrderPreview {
            item_count: cart.item_count(),
            total: cart.total(),
        })
    }

    /// Abort a confirming order. No network call was or will be made.
    pub fn decline(&mut self) {
        if self.state == CheckoutState::Confirming {
            self.state = CheckoutState::Idle;
        }
    }

    /// Submit the confirmed order.
    ///
    /// On HTTP 201 the cart, its snapshot, and the customer fields are all
    /// cleared. On any other status or a transport failure everything is
    /// left exactly as it was; the caller is responsible for notifying the
    /// user. Either way the flow returns to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns `NotConfirmed` unless the flow is in `Confirming`, an
    /// `Api` error for a rejected or failed submission, and a `Store` error
    /// if local state cannot be cleared after an acknowledged order.
    #[instrument(skip(self, client, manager))]
    pub async fn submit(
        &mut self,
        client: &ApiClient,
        manager: &mut CartManager,
    ) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::Confirming {
            return Err(CheckoutError::NotConfirmed);
        }
        self.state = CheckoutState::Submitting;

        let order =
            OrderRequest::from_cart(&self.customer_name, &self.delivery_address, manager.cart());

        match client.create_order(&order).await {
            Ok(()) => {
                let total = order.total;
                manager.clear()?;
                self.customer_name.clear();
                self.delivery_address.clear();
                self.state = CheckoutState::Idle;
                info!(%total, "order placed");
                Ok(())
            }
            Err(e) => {
                self.state = CheckoutState::Idle;
                tracing::error!("Failed to place order: {e}");
                Err(e.into())
            }
        }
    }
}
