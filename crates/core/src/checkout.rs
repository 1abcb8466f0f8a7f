//! Checkout validation.
//!
//! Turns the raw checkout form into a shipping address and payment details,
//! or a user-facing error. Validation short-circuits on the first failure
//! so the visitor sees one problem at a time, in form order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw checkout form input, exactly as posted. All fields default to empty
/// so a partially filled form deserializes instead of erroring.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutDraft {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub house_number: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub mpesa_number: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub cvv: String,
}

/// A validated shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub street: String,
    pub house_number: String,
    pub city: String,
}

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Mpesa,
    CreditCard,
    Cash,
}

impl PaymentMethod {
    /// The form value for this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mpesa => "mpesa",
            Self::CreditCard => "credit_card",
            Self::Cash => "cash",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mpesa => "M-Pesa",
            Self::CreditCard => "Credit card",
            Self::Cash => "Cash on delivery",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "mpesa" => Some(Self::Mpesa),
            "credit_card" => Some(Self::CreditCard),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }
}

/// Validated payment details as persisted on an order.
///
/// The credit card variant intentionally has no CVV field: the CVV is
/// checked for presence during validation and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentDetails {
    Mpesa { mpesa_number: String },
    CreditCard { card_number: String, expiry_date: String },
    Cash,
}

impl PaymentDetails {
    /// The payment method this record belongs to.
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        match self {
            Self::Mpesa { .. } => PaymentMethod::Mpesa,
            Self::CreditCard { .. } => PaymentMethod::CreditCard,
            Self::Cash => PaymentMethod::Cash,
        }
    }
}

/// A checkout form rejection. Messages are user-facing and rendered next
/// to the re-displayed form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Please fill street, house number and city.")]
    IncompleteAddress,
    #[error("Please select a payment method.")]
    InvalidPaymentMethod,
    #[error("Please enter your M-Pesa number.")]
    MissingMpesaNumber,
    #[error("Please fill all credit card details.")]
    IncompleteCardDetails,
}

/// Validate a checkout form.
///
/// # Errors
///
/// Returns the first failing check, in form order: address fields, payment
/// method, then the selected method's own required fields.
pub fn validate(draft: &CheckoutDraft) -> Result<(ShippingAddress, PaymentDetails), CheckoutError> {
    let street = draft.street.trim();
    let house_number = draft.house_number.trim();
    let city = draft.city.trim();
    if street.is_empty() || house_number.is_empty() || city.is_empty() {
        return Err(CheckoutError::IncompleteAddress);
    }
    let address = ShippingAddress {
        street: street.to_string(),
        house_number: house_number.to_string(),
        city: city.to_string(),
    };

    let method = PaymentMethod::parse(draft.payment_method.trim())
        .ok_or(CheckoutError::InvalidPaymentMethod)?;

    let payment = match method {
        PaymentMethod::Mpesa => {
            let mpesa_number = draft.mpesa_number.trim();
            if mpesa_number.is_empty() {
                return Err(CheckoutError::MissingMpesaNumber);
            }
            PaymentDetails::Mpesa {
                mpesa_number: mpesa_number.to_string(),
            }
        }
        PaymentMethod::CreditCard => {
            let card_number = draft.card_number.trim();
            let expiry_date = draft.expiry_date.trim();
            let cvv = draft.cvv.trim();
            if card_number.is_empty() || expiry_date.is_empty() || cvv.is_empty() {
                return Err(CheckoutError::IncompleteCardDetails);
            }
            // The CVV was present; it is not carried any further.
            PaymentDetails::CreditCard {
                card_number: card_number.to_string(),
                expiry_date: expiry_date.to_string(),
            }
        }
        PaymentMethod::Cash => PaymentDetails::Cash,
    };

    Ok((address, payment))
}
