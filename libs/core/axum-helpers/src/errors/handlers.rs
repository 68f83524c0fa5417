use axum::response::{IntoResponse, Response};
use axum::http::StatusCode;
use std::any::Any;

use super::{ErrorCode, ErrorDetails, ErrorResponse, INTERNAL_ERROR_DETAILS};

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    ErrorResponse::new(
        StatusCode::NOT_FOUND,
        ErrorCode::NotFound,
        ErrorDetails::Message("The requested resource was not found".to_string()),
    )
    .into_response()
}

/// Fallback for known routes called with an unsupported method.
pub async fn method_not_allowed() -> Response {
    ErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed,
        ErrorDetails::Message("The HTTP method is not allowed for this resource".to_string()),
    )
    .into_response()
}

/// Response for a handler that panicked, for use with `CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let cause = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        error_code = ErrorCode::InternalError.code(),
        "Handler panicked: {}",
        cause
    );

    ErrorResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::InternalError,
        ErrorDetails::Message(INTERNAL_ERROR_DETAILS.to_string()),
    )
    .into_response()
}
