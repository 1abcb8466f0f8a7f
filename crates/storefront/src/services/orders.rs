//! The process-wide order log.
//!
//! An explicit append-only store for completed orders. Lifetime equals
//! process lifetime; nothing is persisted across restarts and nothing is
//! ever evicted. Appends are serialized by a mutex so concurrent checkout
//! requests cannot interleave writes.

use std::sync::{Mutex, PoisonError};

use timberhaus_core::{Order, OrderId};

/// Append-only in-memory store of completed orders.
///
/// Lives in [`crate::state::AppState`], never in ambient global state.
#[derive(Debug, Default)]
pub struct OrderLog {
    orders: Mutex<Vec<Order>>,
}

impl OrderLog {
    /// Create an empty order log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed order and return its id.
    pub fn append(&self, order: Order) -> OrderId {
        let id = order.id.clone();
        self.lock().push(order);
        id
    }

    /// Find an order by id. Linear scan; the log is small and append-only.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Order> {
        self.lock().iter().find(|o| o.id.as_str() == id).cloned()
    }

    /// Number of orders placed since process start.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether any order has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Order>> {
        // A poisoned lock means a panic mid-push; the Vec is still valid.
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
