//! Response handling and error mapping.
//!
//! # Responsibilities
//! - Map handler failures to HTTP status codes
//! - Render every failure as a JSON document
//!
//! # Design Decisions
//! - Handlers return `Result<Json<T>, ApiError>`; nothing escapes as a panic
//! - Error bodies keep the wire shape clients already depend on

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The only method any endpoint accepts.
pub const ALLOWED_METHODS: [&str; 1] = ["GET"];

/// Failures a handler can surface to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid timezone")]
    InvalidTimezone { message: String },

    #[error("Not found")]
    RouteNotFound { path: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UserNotFound | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidTimezone { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let body = match self {
            ApiError::MethodNotAllowed => json!({
                "error": error,
                "allowedMethods": ALLOWED_METHODS,
            }),
            ApiError::UserNotFound => json!({
                "success": false,
                "error": error,
            }),
            ApiError::InvalidTimezone { message } => json!({
                "success": false,
                "error": error,
                "message": message,
            }),
            ApiError::RouteNotFound { path } => json!({
                "error": error,
                "path": path,
            }),
        };

        (status, Json(body)).into_response()
    }
}
