//! Contact form route handlers.
//!
//! With a database configured, submissions are persisted to the `contacts`
//! table; without one they are logged. A database failure is reported to
//! the visitor as a generic error and never crashes the request.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::db::{NewContact, insert_contact};
use crate::error::Result;
use crate::filters;
use crate::models::session as session_data;
use crate::models::FlashMessage;
use crate::state::AppState;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/form.html")]
pub struct ContactTemplate {
    pub cart_count: u32,
    pub messages: Vec<FlashMessage>,
}

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Display the contact form.
#[instrument(skip(session))]
pub async fn form(session: Session) -> ContactTemplate {
    let cart = session_data::load_cart(&session).await;
    ContactTemplate {
        cart_count: cart.item_count(),
        messages: session_data::take_flash(&session).await,
    }
}

/// Handle a contact form submission.
///
/// # Errors
///
/// Returns 500 if the session store rejects the flash write.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ContactForm>,
) -> Result<Response> {
    let name = form.name.trim();
    let email = form.email.trim().to_lowercase();
    let message = form.message.trim();

    let cart = session_data::load_cart(&session).await;
    let rerender = |text: &str| ContactTemplate {
        cart_count: cart.item_count(),
        messages: vec![FlashMessage::danger(text)],
    };

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Ok(rerender("Please fill all fields.").into_response());
    }
    if !is_valid_email(&email) {
        return Ok(rerender("Please enter a valid email address.").into_response());
    }

    if let Some(pool) = state.pool() {
        let contact = NewContact {
            name: name.to_string(),
            email: email.clone(),
            message: message.to_string(),
        };
        if let Err(e) = insert_contact(pool, &contact).await {
            tracing::error!(error = %e, "Failed to store contact message");
            return Ok(rerender("Something went wrong. Please try again.").into_response());
        }
        tracing::info!(email = %email, "Contact message stored");
    } else {
        // No database configured: the log is the mailbox.
        tracing::info!(name = %name, email = %email, message = %message, "Contact message received");
    }

    session_data::push_flash(
        &session,
        FlashMessage::success("Thanks - message received. We'll contact you soon."),
    )
    .await?;
    Ok(Redirect::to("/contact").into_response())
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@localhost"));
    }
}
