//! Per-visitor cart and the cart aggregator.
//!
//! A [`Cart`] is the transient mapping of product id to desired quantity
//! that lives in the visitor's session. Resolving it against the catalog
//! happens in [`summarize`], a pure function - line items and totals are
//! derived, never stored.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::types::money::round_money;
use crate::types::ProductId;

/// Mapping of product id to quantity, owned by a visitor session.
///
/// Quantities are always positive; setting a quantity to zero removes the
/// line. A `BTreeMap` keeps line order stable across renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of items across all lines (nav badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.values().sum()
    }

    /// Quantity for one product, zero if absent.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.lines.get(&id).copied().unwrap_or(0)
    }

    /// Add `quantity` items of a product, incrementing any existing line.
    pub fn add(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.lines.entry(id).or_insert(0) += quantity;
    }

    /// Replace a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.lines.remove(&id);
        } else {
            self.lines.insert(id, quantity);
        }
    }

    /// Remove a line. Removing an absent product is a no-op.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.remove(&id);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Iterate over (product id, quantity) pairs in id order.
    pub fn lines(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.lines.iter().map(|(id, qty)| (*id, *qty))
    }
}

/// A cart line resolved against the catalog, with its rounded subtotal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
    /// `round_half_up(unit price x quantity, 2dp)`.
    pub subtotal: Decimal,
}

/// The aggregator's output: resolved line items and their grand total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartSummary {
    pub items: Vec<LineItem>,
    /// Sum of the per-line rounded subtotals; lines are rounded before
    /// summation, never the other way around.
    pub total: Decimal,
}

impl CartSummary {
    /// Whether there is anything to check out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Resolve a cart against the catalog.
///
/// Product ids with no catalog entry are skipped silently - a session may
/// hold lines for products that have since been removed.
#[must_use]
pub fn summarize(cart: &Cart, catalog: &Catalog) -> CartSummary {
    let mut items = Vec::new();
    let mut total = Decimal::ZERO;

    for (id, quantity) in cart.lines() {
        let Some(product) = catalog.get(id) else {
            continue;
        };
        let subtotal = round_money(product.price * Decimal::from(quantity));
        total += subtotal;
        items.push(LineItem {
            product: product.clone(),
            quantity,
            subtotal,
        });
    }

    CartSummary { items, total }
}
