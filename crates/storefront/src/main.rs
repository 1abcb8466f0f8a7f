//! Timberhaus Storefront - demo furniture shop.
//!
//! This binary serves the public-facing storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with server-side rendering
//! - Askama templates
//! - In-process catalog and order log (lifetime = process lifetime)
//! - Session-held carts (tower-sessions, in-memory store)
//! - Optional `PostgreSQL` for contact messages

#![cfg_attr(not(test), forbid(unsafe_code))]

use timberhaus_storefront::catalog::seed_catalog;
use timberhaus_storefront::config::StorefrontConfig;
use timberhaus_storefront::state::AppState;
use timberhaus_storefront::{app, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "timberhaus_storefront=info,tower_http=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create the lazy database pool when a database is configured.
    // Connectivity is only tested per request; the contact endpoint
    // degrades gracefully if the database is unreachable.
    let pool = match config.database_url.as_ref() {
        Some(url) => {
            let pool = db::create_pool(url).expect("Invalid database URL");
            tracing::info!("Database pool created (lazy)");
            Some(pool)
        }
        None => {
            tracing::info!("No database configured; contact messages will be logged only");
            None
        }
    };

    // NOTE: Migrations are NOT run automatically on startup.
    // Run them explicitly via: sqlx migrate run --source crates/storefront/migrations

    let catalog = seed_catalog();
    tracing::info!(products = catalog.len(), "Catalog loaded");

    // Build application state and router
    let state = AppState::new(config.clone(), catalog, pool);
    let router = app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
