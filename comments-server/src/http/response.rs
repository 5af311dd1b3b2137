//! Response envelope
//!
//! Every endpoint answers with `{code, msg, data}`. `code` is 0 on success
//! and mirrors the HTTP status otherwise; `data` is null on errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Message sent with every successful response
pub const SUCCESS_MSG: &str = "success";

/// Uniform response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: SUCCESS_MSG.to_owned(),
            data: Some(data),
        }
    }

    /// Error response; `code` is the HTTP status.
    pub fn error(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            msg: msg.into(),
            data: None,
        }
    }

    /// HTTP status this envelope is sent with.
    pub fn status(&self) -> StatusCode {
        if self.code == 0 {
            StatusCode::OK
        } else {
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with `data: null`.
    pub fn empty() -> Self {
        Self {
            code: 0,
            msg: SUCCESS_MSG.to_owned(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
