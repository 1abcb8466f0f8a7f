//! Unified error handling for the storefront.
//!
//! Provides a unified `AppError` type that logs server faults and renders
//! the custom 404/500 pages. Route handlers that can fail return
//! `Result<T, AppError>`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::filters;
use crate::models::FlashMessage;

/// Custom 404 page.
#[derive(Default, Template, WebTemplate)]
#[template(path = "errors/not_found.html")]
pub struct NotFoundTemplate {
    pub cart_count: u32,
    pub messages: Vec<FlashMessage>,
}

/// Custom 500 page.
#[derive(Default, Template, WebTemplate)]
#[template(path = "errors/server_error.html")]
pub struct ServerErrorTemplate {
    pub cart_count: u32,
    pub messages: Vec<FlashMessage>,
}

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(what) => {
                tracing::debug!(what = %what, "not found");
                (StatusCode::NOT_FOUND, NotFoundTemplate::default()).into_response()
            }
            Self::Session(_) | Self::Internal(_) => {
                // Don't expose internal error details to clients
                tracing::error!(error = %self, "Request error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ServerErrorTemplate::default(),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = AppError::Internal("boom".to_string());
        assert_eq!(err.to_string(), "Internal error: boom");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
