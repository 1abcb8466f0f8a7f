//! Order confirmation route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tower_sessions::Session;
use tracing::instrument;

use rust_decimal::Decimal;
use timberhaus_core::{LineItem, Order, PaymentDetails, ShippingAddress};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session as session_data;
use crate::models::FlashMessage;
use crate::state::AppState;

/// Order display data for the confirmation template.
pub struct OrderView {
    pub id: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub address: ShippingAddress,
    pub payment_summary: String,
    pub created_at: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            payment_summary: payment_summary(&order.payment),
            created_at: order.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            items: order.items,
            total: order.total,
            address: order.address,
        }
    }
}

/// One-line payment description. Card numbers are reduced to their last
/// four digits for display.
fn payment_summary(payment: &PaymentDetails) -> String {
    match payment {
        PaymentDetails::Mpesa { mpesa_number } => format!("M-Pesa ({mpesa_number})"),
        PaymentDetails::CreditCard { card_number, .. } => {
            let digits = card_number.chars().filter(char::is_ascii_digit).count();
            let last_four: String = card_number
                .chars()
                .filter(char::is_ascii_digit)
                .skip(digits.saturating_sub(4))
                .collect();
            format!("Credit card ending {last_four}")
        }
        PaymentDetails::Cash => "Cash on delivery".to_string(),
    }
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/confirmation.html")]
pub struct OrderConfirmationTemplate {
    pub order: OrderView,
    pub cart_count: u32,
    pub messages: Vec<FlashMessage>,
}

/// Display the confirmation page for a placed order.
///
/// # Errors
///
/// Returns 404 if no order with this id exists.
#[instrument(skip(state, session))]
pub async fn confirmation(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<String>,
) -> Result<OrderConfirmationTemplate> {
    let order = state
        .orders()
        .find(&order_id)
        .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;

    let cart = session_data::load_cart(&session).await;
    Ok(OrderConfirmationTemplate {
        order: OrderView::from(order),
        cart_count: cart.item_count(),
        messages: session_data::take_flash(&session).await,
    })
}
