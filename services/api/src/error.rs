//! Custom error types for the API service
//!
//! Every fault a handler surfaces is one of these variants; the
//! `IntoResponse` impl turns it into the uniform failure envelope
//! `{success: false, error, message?}` with the matching status code.
//! The 401 message is identical for unknown-email and wrong-password so
//! login failures carry no enumeration signal.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or unusable input
    #[error("{0}")]
    Validation(String),

    /// No matching row
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Bad login credentials; deliberately generic
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Admin key mismatch
    #[error("Invalid admin key")]
    Forbidden,

    /// Credential processing fault
    #[error("Password hashing error: {0}")]
    Hashing(String),

    /// Any persistence-layer fault
    #[error("Database error: {0}")]
    Storage(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                "Validation error".to_string(),
                Some(detail),
            ),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found"), None),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
                None,
            ),
            ApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden".to_string(),
                Some("Invalid admin key".to_string()),
            ),
            ApiError::Hashing(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Password hashing error".to_string(),
                Some(detail),
            ),
            ApiError::Storage(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
                Some(detail),
            ),
        };

        let body = match message {
            Some(message) => json!({
                "success": false,
                "error": error,
                "message": message,
            }),
            None => json!({
                "success": false,
                "error": error,
            }),
        };

        (status, Json(body)).into_response()
    }
}
