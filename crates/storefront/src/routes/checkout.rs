//! Checkout route handlers.
//!
//! GET renders the checkout form over the current cart; POST validates it
//! and, on success, materializes an order, appends it to the order log,
//! and clears the cart. Validation failures re-render the form with the
//! entered cart and an error message; nothing is mutated.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use rust_decimal::Decimal;
use timberhaus_core::{CartSummary, CheckoutDraft, LineItem, Order, checkout, summarize};

use crate::error::Result;
use crate::filters;
use crate::models::session as session_data;
use crate::models::FlashMessage;
use crate::state::AppState;

/// Checkout form template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/form.html")]
pub struct CheckoutTemplate {
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub cart_count: u32,
    pub messages: Vec<FlashMessage>,
}

impl CheckoutTemplate {
    fn new(summary: CartSummary, cart_count: u32, messages: Vec<FlashMessage>) -> Self {
        Self {
            items: summary.items,
            total: summary.total,
            cart_count,
            messages,
        }
    }
}

/// An empty cart cannot be checked out; flash and send the visitor to the
/// catalog instead. Applies to both GET and POST.
async fn reject_empty_cart(session: &Session) -> Result<Response> {
    session_data::push_flash(
        session,
        FlashMessage::warning("Your cart is empty. Add items before checkout."),
    )
    .await?;
    Ok(Redirect::to("/products").into_response())
}

/// Display the checkout form.
///
/// # Errors
///
/// Returns 500 if the session store rejects the flash write.
#[instrument(skip(state, session))]
pub async fn form(State(state): State<AppState>, session: Session) -> Result<Response> {
    let cart = session_data::load_cart(&session).await;
    let summary = summarize(&cart, state.catalog());
    if summary.is_empty() {
        return reject_empty_cart(&session).await;
    }

    let messages = session_data::take_flash(&session).await;
    Ok(CheckoutTemplate::new(summary, cart.item_count(), messages).into_response())
}

/// Validate the checkout form and create the order.
///
/// # Errors
///
/// Returns 500 if the session store rejects a write.
#[instrument(skip(state, session, draft))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(draft): Form<CheckoutDraft>,
) -> Result<Response> {
    let cart = session_data::load_cart(&session).await;
    let summary = summarize(&cart, state.catalog());
    if summary.is_empty() {
        return reject_empty_cart(&session).await;
    }

    let (address, payment) = match checkout::validate(&draft) {
        Ok(validated) => validated,
        Err(error) => {
            // Re-render the form with the entered cart; no state mutated.
            let messages = vec![FlashMessage::danger(error.to_string())];
            return Ok(CheckoutTemplate::new(summary, cart.item_count(), messages).into_response());
        }
    };

    let order = Order::place(summary, address, payment);
    let order_id = state.orders().append(order);
    session_data::clear_cart(&session).await?;
    session_data::push_flash(&session, FlashMessage::success("Order placed successfully.")).await?;

    tracing::info!(order_id = %order_id, "order placed");
    Ok(Redirect::to(&format!("/order/{order_id}")).into_response())
}
