//! Timberhaus Core - Shared domain library.
//!
//! This crate provides the domain types and logic used by the storefront:
//! - [`catalog`] - Products and the read-only catalog
//! - [`cart`] - Per-visitor cart and the cart aggregator
//! - [`checkout`] - Checkout validation and payment details
//! - [`order`] - Immutable order records
//! - [`types`] - Newtype IDs and money rounding/formatting
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP. This keeps it lightweight and allows it to be used
//! anywhere. Everything that touches the network or a session lives in the
//! storefront crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod order;
pub mod types;

pub use cart::{Cart, CartSummary, LineItem, summarize};
pub use catalog::{Catalog, Product};
pub use checkout::{
    CheckoutDraft, CheckoutError, PaymentDetails, PaymentMethod, ShippingAddress,
};
pub use order::{Order, OrderId};
pub use types::*;
