//! Session-stored types and helpers.
//!
//! The visitor's cart and any pending flash messages live in the session.
//! Loads are tolerant (a missing or unreadable value is an empty default);
//! writes propagate their errors so handlers can surface a 500.

use serde::{Deserialize, Serialize};
use timberhaus_core::Cart;
use tower_sessions::Session;

/// Session keys.
pub mod keys {
    /// Key for storing the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for pending flash messages.
    pub const FLASH: &str = "flash";
}

/// Severity of a flash message, mapped to an alert style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl FlashLevel {
    /// CSS class suffix for the alert box.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A one-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Warning,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            text: text.into(),
        }
    }
}

/// Queue a flash message for the next rendered page.
///
/// # Errors
///
/// Returns the session store error if the write fails.
pub async fn push_flash(
    session: &Session,
    message: FlashMessage,
) -> Result<(), tower_sessions::session::Error> {
    let mut pending: Vec<FlashMessage> = session.get(keys::FLASH).await?.unwrap_or_default();
    pending.push(message);
    session.insert(keys::FLASH, pending).await
}

/// Take all pending flash messages, leaving none behind.
pub async fn take_flash(session: &Session) -> Vec<FlashMessage> {
    session
        .remove::<Vec<FlashMessage>>(keys::FLASH)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Load the visitor's cart, empty if absent.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the visitor's cart.
///
/// # Errors
///
/// Returns the session store error if the write fails.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Drop the cart from the session (checkout success or explicit clear).
///
/// # Errors
///
/// Returns the session store error if the removal fails.
pub async fn clear_cart(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<Cart>(keys::CART).await.map(|_| ())
}
