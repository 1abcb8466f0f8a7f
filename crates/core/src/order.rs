//! Immutable order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{CartSummary, LineItem};
use crate::checkout::{PaymentDetails, ShippingAddress};
use rust_decimal::Decimal;

/// Length of the displayed order token.
const TOKEN_LENGTH: usize = 8;

/// A short order token: the first eight hex characters of a random
/// 128-bit value, uppercased.
///
/// Collision probability is negligible for a process-lifetime order log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generate a fresh random order id.
    #[must_use]
    pub fn generate() -> Self {
        let token: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(TOKEN_LENGTH)
            .collect();
        Self(token.to_uppercase())
    }

    /// The token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable record of a completed purchase.
///
/// Created exactly once per successful checkout; the line items are a
/// snapshot taken at checkout time and stay fixed even if the catalog
/// changes later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub address: ShippingAddress,
    pub payment: PaymentDetails,
    /// UTC creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Materialize an order from a checkout: generates the id, snapshots
    /// the cart summary, and stamps the current UTC time.
    #[must_use]
    pub fn place(summary: CartSummary, address: ShippingAddress, payment: PaymentDetails) -> Self {
        Self {
            id: OrderId::generate(),
            items: summary.items,
            total: summary.total,
            address,
            payment,
            created_at: Utc::now(),
        }
    }
}
