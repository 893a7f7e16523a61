//! Application error types and the single point of translation to HTTP.
//!
//! Every stage of the request pipeline (authentication, authorization,
//! validation, handlers, storage) fails fast with an [`AppError`]. The
//! [`IntoResponse`] impl is the one place where errors become wire-level
//! responses and the one place where they are logged. Handler panics are
//! funneled through [`panic_response`] by the catch-panic layer in
//! [`crate::routes`], so no request failure tears down the process.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Request pipeline error.
///
/// Variants map one-to-one onto response status codes:
///
/// - `Unauthorized` - no credential supplied (401)
/// - `InvalidToken` - credential supplied but unverifiable (400)
/// - `Forbidden` - verified credential, insufficient privilege (403)
/// - `Validation` - input shape or range violation (400)
/// - `NotFound` - resource addressing failure (404)
/// - `Internal` - unanticipated failure; detail withheld from the client (500)
#[derive(Debug)]
pub enum AppError {
    Unauthorized { message: String, details: Value },
    InvalidToken { message: String, details: Value },
    Forbidden { message: String, details: Value },
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_token(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidToken {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::InvalidToken { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_token", message, details)
            }
            AppError::Forbidden { message, details } => {
                (StatusCode::FORBIDDEN, "forbidden", message, details)
            }
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, code, %message, "request failed");
        } else {
            tracing::warn!(status = %status, code, %message, "request rejected");
        }

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "storage error");
        AppError::internal("Something failed.", json!({}))
    }
}

/// Builds the response for a panicking handler.
///
/// Wired into `CatchPanicLayer` so an unwinding handler surfaces as a
/// normalized 500 instead of an aborted connection.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("panic payload of unknown type");

    tracing::error!(panic = detail, "handler panicked");

    AppError::internal("Something failed.", json!({})).into_response()
}
