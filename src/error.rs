//! Application error type and its HTTP mapping.
//!
//! Every failure leaving a handler is rendered as
//! `{ "error": { "message": "..." } }`. Store errors are never inspected:
//! they are logged and reported to the client as a generic `500 server error`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned to clients for any infrastructure failure.
pub const SERVER_ERROR_MESSAGE: &str = "server error";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Client sent a request that fails validation (400).
    #[error("{message}")]
    Validation { message: String },
    /// The addressed resource does not exist (404).
    #[error("{message}")]
    NotFound { message: String },
    /// Store or infrastructure failure (500). The message is logged, not returned.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Builds the `Missing '<field>' in request body` validation error.
    pub fn missing_field(field: &str) -> Self {
        Self::bad_request(format!("Missing '{field}' in request body"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::Validation { message } | AppError::NotFound { message } => message,
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Request failed with internal error");
                SERVER_ERROR_MESSAGE.to_string()
            }
        };

        let body = ErrorBody {
            error: ErrorInfo { message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}
