//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use timberhaus_core::Product;

use crate::filters;
use crate::models::session as session_data;
use crate::models::FlashMessage;
use crate::state::AppState;

/// Number of products shown on the landing page.
const FEATURED_COUNT: usize = 3;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub featured: Vec<Product>,
    pub cart_count: u32,
    pub messages: Vec<FlashMessage>,
}

/// Display the landing page with a subset of featured products.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> HomeTemplate {
    let cart = session_data::load_cart(&session).await;
    HomeTemplate {
        featured: state.catalog().featured(FEATURED_COUNT).cloned().collect(),
        cart_count: cart.item_count(),
        messages: session_data::take_flash(&session).await,
    }
}
