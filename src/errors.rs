//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::bson::oid;
use thiserror::Error;

use crate::config::EMAIL_TAKEN_MESSAGE;
use crate::types::MessageResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request shape
    #[error("{0}")]
    Validation(String),

    // Resource errors
    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    #[error("Not Implemented")]
    NotImplemented,

    // External service errors
    #[error("Database error")]
    Database(#[from] mongodb::error::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal Server Error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal Server Error".to_string()
            }

            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = MessageResponse::new(self.user_message());

        (status, Json(body)).into_response()
    }
}

impl From<oid::Error> for AppError {
    fn from(err: oid::Error) -> Self {
        AppError::Validation(format!("userId is not a valid identifier: {}", err))
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    /// Another user already holds this email address
    pub fn email_taken() -> Self {
        AppError::Conflict(EMAIL_TAKEN_MESSAGE.to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_message(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["message"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_message(response).await, "Not Found");
    }

    #[tokio::test]
    async fn test_validation_message_is_public() {
        let response = AppError::validation("email is invalid").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_message(response).await, "email is invalid");
    }

    #[tokio::test]
    async fn test_email_taken_is_conflict() {
        let response = AppError::email_taken().into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_message(response).await, EMAIL_TAKEN_MESSAGE);
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let response = AppError::internal("connection pool exhausted").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_message(response).await, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_not_implemented_response() {
        let response = AppError::NotImplemented.into_response();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body_message(response).await, "Not Implemented");
    }

    #[test]
    fn test_object_id_error_maps_to_validation() {
        let err = oid::ObjectId::parse_str("xyz").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Validation(_)));
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(7u8).ok_or_not_found().unwrap(), 7);
    }
}
