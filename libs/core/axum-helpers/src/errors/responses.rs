//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T12:00:00Z",
        "status": 500,
        "error": "Internal server error",
        "details": "An unexpected error occurred. Please try again later."
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T12:00:00Z",
        "status": 400,
        "error": "Validation failed for one or more fields",
        "details": {
            "title": "title must be between 2 and 100 characters",
            "priority": "priority must be between 0 and 5"
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T12:00:00Z",
        "status": 400,
        "error": "Invalid resource identifier",
        "details": "'abc' is not a valid id"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T12:00:00Z",
        "status": 404,
        "error": "Resource not found",
        "details": "Todo with id 7 was not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
