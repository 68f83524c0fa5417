pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Violation message per field name, ordered by field name
pub type FieldErrors = BTreeMap<String, String>;

/// Sent instead of the real cause for every 500 response
pub const INTERNAL_ERROR_DETAILS: &str = "An unexpected error occurred. Please try again later.";

/// Collapse validator output to the first message of each failing field.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("invalid value ({})", err.code),
                })
                .unwrap_or_else(|| "invalid value".to_string());
            (field.to_string(), message)
        })
        .collect()
}

/// Either a field → message map (validation) or a free-form message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetails {
    Fields(FieldErrors),
    Message(String),
}

/// Body of every error response.
///
/// ```json
/// {
///   "timestamp": "2025-01-01T12:00:00Z",
///   "status": 404,
///   "error": "Resource not found",
///   "details": "Todo with id 7 was not found"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// When the failure was produced (RFC 3339, UTC)
    pub timestamp: DateTime<Utc>,
    /// Numeric HTTP status code, repeated from the status line
    pub status: u16,
    /// Human-readable category of the failure
    pub error: String,
    pub details: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: ErrorCode, details: ErrorDetails) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: code.default_message().to_string(),
            details,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type; `into_response` is the one place
/// where failures become status codes and error bodies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation failed: {0:?}")]
    Validation(FieldErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, details) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                // Body and type errors are client input errors; keep 413/415 as is
                let status = match &e {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    other => other.status(),
                };
                (
                    status,
                    ErrorCode::InvalidJson,
                    ErrorDetails::Message(e.body_text()),
                )
            }
            AppError::Validation(fields) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    fields = ?fields.keys().collect::<Vec<_>>(),
                    "Validation error"
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    ErrorDetails::Fields(fields),
                )
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), "Invalid id: {}", raw);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidId,
                    ErrorDetails::Message(format!("'{}' is not a valid id", raw)),
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorCode::NotFound,
                    ErrorDetails::Message(msg),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    ErrorDetails::Message(INTERNAL_ERROR_DETAILS.to_string()),
                )
            }
        };

        ErrorResponse::new(status, code, details).into_response()
    }
}
