//! Database operations for the storefront `PostgreSQL` (optional).
//!
//! The catalog and the order log are in-process; the database stores
//! contact messages only.
//!
//! ## Tables
//!
//! - `contacts` - Messages submitted through the contact form
//!
//! # Connection model
//!
//! The pool is created lazily: no connection is opened until a request
//! needs one, and an unreachable database surfaces as a per-request error
//! in the contact handler rather than a startup failure.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and are NOT
//! run automatically on startup. Run them explicitly via:
//! ```bash
//! sqlx migrate run --source crates/storefront/migrations
//! ```

pub mod contacts;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use thiserror::Error;

pub use contacts::{NewContact, insert_contact};

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a lazy `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection string cannot be parsed.
/// Connectivity itself is only tested when a query runs.
pub fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url.expose_secret())
}
