//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;
use timberhaus_core::Catalog;

use crate::config::StorefrontConfig;
use crate::services::orders::OrderLog;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the order log, configuration, and the optional database pool.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    orders: OrderLog,
    pool: Option<PgPool>,
}

impl AppState {
    /// Create a new application state with an empty order log.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - The product catalog (read-only for process lifetime)
    /// * `pool` - Optional `PostgreSQL` pool for contact messages
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog, pool: Option<PgPool>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                orders: OrderLog::new(),
                pool,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the process-wide order log.
    #[must_use]
    pub fn orders(&self) -> &OrderLog {
        &self.inner.orders
    }

    /// Get a reference to the database connection pool, if configured.
    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }
}
