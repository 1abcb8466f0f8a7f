//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Landing page (featured products)
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check
//!
//! # Catalog
//! GET  /products                - Product listing
//! GET  /product/{id}            - Product detail (404 if unknown)
//!
//! # Cart
//! POST /add_to_cart             - Add a product, redirect
//! POST /update_cart             - Bulk quantity update, redirect
//! GET  /remove_from_cart/{id}   - Remove one line, redirect
//! GET  /clear_cart              - Empty the cart, redirect
//! GET  /cart                    - Cart page (line items + total)
//!
//! # Checkout
//! GET  /checkout                - Checkout form
//! POST /checkout                - Validate, create order, redirect
//! GET  /order/{order_id}        - Order confirmation (404 if unknown)
//!
//! # Contact
//! GET  /contact                 - Contact form
//! POST /contact                 - Validate and store/log the message
//! ```

pub mod cart;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::error::NotFoundTemplate;
use crate::models::session as session_data;
use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Catalog
        .route("/products", get(products::index))
        .route("/product/{id}", get(products::show))
        // Cart
        .route("/add_to_cart", post(cart::add))
        .route("/update_cart", post(cart::update))
        .route("/remove_from_cart/{id}", get(cart::remove))
        .route("/clear_cart", get(cart::clear))
        .route("/cart", get(cart::show))
        // Checkout
        .route("/checkout", get(checkout::form).post(checkout::submit))
        .route("/order/{order_id}", get(orders::confirmation))
        // Contact
        .route("/contact", get(contact::form).post(contact::submit))
        // Health checks
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Fallback handler: custom 404 page for unmatched paths.
pub async fn not_found(session: Session) -> (StatusCode, NotFoundTemplate) {
    let cart = session_data::load_cart(&session).await;
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            cart_count: cart.item_count(),
            messages: Vec::new(),
        },
    )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity when a database is configured; without
/// one there is nothing else to wait for.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.pool() {
        Some(pool) => match sqlx::query("SELECT 1").fetch_one(pool).await {
            Ok(_) => StatusCode::OK,
            Err(_) => StatusCode::SERVICE_UNAVAILABLE,
        },
        None => StatusCode::OK,
    }
}
