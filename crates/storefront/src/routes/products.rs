//! Catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tower_sessions::Session;
use tracing::instrument;

use timberhaus_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session as session_data;
use crate::models::FlashMessage;
use crate::state::AppState;

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<Product>,
    pub cart_count: u32,
    pub messages: Vec<FlashMessage>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: Product,
    pub cart_count: u32,
    pub messages: Vec<FlashMessage>,
}

/// Display the full catalog listing.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> ProductsIndexTemplate {
    let cart = session_data::load_cart(&session).await;
    ProductsIndexTemplate {
        products: state.catalog().all().to_vec(),
        cart_count: cart.item_count(),
        messages: session_data::take_flash(&session).await,
    }
}

/// Display a single product detail page.
///
/// # Errors
///
/// Returns 404 if the path segment is not a catalog product id.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<ProductShowTemplate> {
    let product = id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().get(id))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?
        .clone();

    let cart = session_data::load_cart(&session).await;
    Ok(ProductShowTemplate {
        product,
        cart_count: cart.item_count(),
        messages: session_data::take_flash(&session).await,
    })
}
