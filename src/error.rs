//! Error types for the user API
//!
//! Provides unified error handling using thiserror. Every handler error is
//! translated into an HTTP status and a `{"message": ...}` body here; nothing
//! propagates past the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

// == API Error Enum ==
/// Unified error type for the request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Required input missing from the request body
    #[error("{0}")]
    Validation(String),

    /// Target user does not exist
    #[error("{0}")]
    NotFound(String),

    /// Backend communication failed
    #[error(transparent)]
    Backend(#[from] StoreError),
}

impl ApiError {
    /// Standard not-found error for a user id.
    pub fn user_not_found(id: &str) -> Self {
        ApiError::NotFound(format!("User with id {} not found", id))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Backend(err) => {
                // Log the backend detail, return a generic message only.
                error!("Backend error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response =
            ApiError::Validation("id, name, and email are required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::user_not_found("123").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_backend_maps_to_500() {
        let response = ApiError::Backend(StoreError::Disabled).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_user_not_found_message() {
        let err = ApiError::user_not_found("42");
        assert_eq!(err.to_string(), "User with id 42 not found");
    }
}
