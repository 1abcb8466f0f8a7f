//! Contact message repository.

use sqlx::PgPool;

use super::RepositoryError;

/// A contact form submission to persist.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Insert a contact message.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails, including when
/// no connection can be acquired from the lazy pool.
pub async fn insert_contact(pool: &PgPool, contact: &NewContact) -> Result<(), RepositoryError> {
    sqlx::query("INSERT INTO contacts (name, email, message) VALUES ($1, $2, $3)")
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .execute(pool)
        .await?;
    Ok(())
}
