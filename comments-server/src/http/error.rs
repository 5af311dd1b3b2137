//! API error types with IntoResponse
//!
//! Errors are converted to envelope responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::response::ApiResponse;
use crate::db::repos::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Id is zero or not a positive integer (400)
    InvalidId,

    /// Comment not found (404)
    NotFound { id: u32 },

    /// Request could not be parsed (400)
    BadRequest { message: String },

    /// Database error (500, logged)
    Database(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidId | Self::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Validation(e) => e.to_string(),
            Self::InvalidId => "id must be a positive integer".to_owned(),
            Self::NotFound { id } => format!("comment {} not found", id),
            Self::BadRequest { message } => message.clone(),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                "an internal error occurred".to_owned()
            }
        };

        ApiResponse::<()>::error(status, message).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(v) => Self::Validation(v),
            StoreError::InvalidId => Self::InvalidId,
            StoreError::NotFound { id } => Self::NotFound { id },
            StoreError::Storage(_) => Self::Database(e),
        }
    }
}
