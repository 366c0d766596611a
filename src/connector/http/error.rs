//! HTTP error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so failures become a JSON `{ "error": ... }`
//! body with the right status code. Validation messages are returned as-is;
//! everything else is logged and reported as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::{Category, DomainError};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ServerError {
    /// The caller sent an invalid or incomplete request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A category handler failed after validation.
    #[error("{} API error: {source}", .category.label())]
    Handler {
        category: Category,
        #[source]
        source: DomainError,
    },
}

impl ServerError {
    /// Validation failures map to 400, anything else stays tagged with its category.
    pub fn from_domain(category: Category, err: DomainError) -> Self {
        if err.is_validation() {
            ServerError::BadRequest(err.to_string())
        } else {
            ServerError::Handler {
                category,
                source: err,
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Handler { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let client_message = match &self {
            ServerError::BadRequest(m) => m.clone(),
            ServerError::Handler { category, source } => {
                error!(category = %category, error = %source, "{} API error", category.label());
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_bad_request() {
        let err = ServerError::from_domain(
            Category::Text,
            DomainError::invalid_type("Invalid text processing type"),
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(err, ServerError::BadRequest(ref m) if m == "Invalid text processing type"));
    }

    #[test]
    fn upstream_errors_become_internal() {
        let err = ServerError::from_domain(Category::Chat, DomainError::upstream("timeout"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Chat API error: Upstream error: timeout");
    }
}
