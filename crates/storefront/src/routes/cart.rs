//! Cart route handlers.
//!
//! The cart itself is session state; every mutation loads it, applies the
//! change through the core cart type, saves it back, and redirects with a
//! flash message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use rust_decimal::Decimal;
use timberhaus_core::{LineItem, ProductId, summarize};

use crate::error::Result;
use crate::filters;
use crate::models::session as session_data;
use crate::models::FlashMessage;
use crate::state::AppState;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub cart_count: u32,
    pub messages: Vec<FlashMessage>,
}

/// Add to cart form data.
///
/// `quantity` stays a raw string: a malformed or missing value falls back
/// to 1 instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub quantity: Option<String>,
    pub next: Option<String>,
}

/// One entry of the bulk update payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Display the cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> CartShowTemplate {
    let cart = session_data::load_cart(&session).await;
    let summary = summarize(&cart, state.catalog());

    CartShowTemplate {
        items: summary.items,
        total: summary.total,
        cart_count: cart.item_count(),
        messages: session_data::take_flash(&session).await,
    }
}

/// Add an item to the cart.
///
/// Unknown product ids leave the cart untouched and send the visitor back
/// to the listing with an error flash. On success the visitor lands on
/// `next` (when it is a site-local path) or the cart page.
///
/// # Errors
///
/// Returns 500 if the session store rejects the write.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let quantity = parse_add_quantity(form.quantity.as_deref());

    let Some(product) = state.catalog().get(form.product_id) else {
        session_data::push_flash(&session, FlashMessage::danger("Product not found.")).await?;
        return Ok(Redirect::to("/products").into_response());
    };

    let mut cart = session_data::load_cart(&session).await;
    cart.add(product.id, quantity);
    session_data::save_cart(&session, &cart).await?;
    session_data::push_flash(
        &session,
        FlashMessage::success(format!("Added {quantity} x {} to cart.", product.name)),
    )
    .await?;

    let target = form
        .next
        .as_deref()
        .filter(|next| next.starts_with('/'))
        .unwrap_or("/cart");
    Ok(Redirect::to(target).into_response())
}

/// Bulk-update line quantities.
///
/// The payload is a sequence of (`product_id`, `quantity`) field pairs,
/// one pair per line. A quantity of zero (or one that fails to parse)
/// removes the line.
///
/// # Errors
///
/// Returns 500 if the session store rejects the write.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let mut cart = session_data::load_cart(&session).await;
    for entry in parse_quantity_updates(&pairs) {
        cart.set_quantity(entry.product_id, entry.quantity);
    }
    session_data::save_cart(&session, &cart).await?;
    session_data::push_flash(&session, FlashMessage::success("Cart updated.")).await?;
    Ok(Redirect::to("/cart").into_response())
}

/// Remove a single line from the cart. Removing an absent (or malformed)
/// product id is a no-op.
///
/// # Errors
///
/// Returns 500 if the session store rejects the write.
#[instrument(skip(session))]
pub async fn remove(session: Session, Path(id): Path<String>) -> Result<Response> {
    if let Ok(product_id) = id.parse::<ProductId>() {
        let mut cart = session_data::load_cart(&session).await;
        cart.remove(product_id);
        session_data::save_cart(&session, &cart).await?;
        session_data::push_flash(&session, FlashMessage::info("Item removed from cart.")).await?;
    }
    Ok(Redirect::to("/cart").into_response())
}

/// Empty the cart unconditionally.
///
/// # Errors
///
/// Returns 500 if the session store rejects the write.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    session_data::clear_cart(&session).await?;
    session_data::push_flash(&session, FlashMessage::info("Cart cleared.")).await?;
    Ok(Redirect::to("/cart").into_response())
}

/// Coerce the posted add-to-cart quantity to at least 1, defaulting to 1
/// when missing or malformed.
fn parse_add_quantity(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .map_or(1, |quantity| quantity.max(1))
}

/// Fold the posted field pairs into quantity updates.
///
/// Pairs arrive in document order: each `product_id` field is followed by
/// the `quantity` field for that line. A quantity that fails to parse
/// becomes 0 (removal); a product id that fails to parse drops the pair.
fn parse_quantity_updates(pairs: &[(String, String)]) -> Vec<QuantityUpdate> {
    let mut updates = Vec::new();
    let mut pending: Option<ProductId> = None;

    for (key, value) in pairs {
        match key.as_str() {
            "product_id" => {
                pending = value.trim().parse::<ProductId>().ok();
            }
            "quantity" => {
                if let Some(product_id) = pending.take() {
                    let quantity = value.trim().parse::<u32>().unwrap_or(0);
                    updates.push(QuantityUpdate {
                        product_id,
                        quantity,
                    });
                }
            }
            _ => {}
        }
    }

    updates
}
