//! # Axum Helpers
//!
//! Shared building blocks for the HTTP layer.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError`, the `{timestamp, status, error, details}` error body, error codes
//! - **[`extractors`]**: Integer id path and JSON body extractors that reject with the error body
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: Router assembly with OpenAPI viewers, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use std::time::Duration;
//!
//! let router = create_router::<ApiDoc>(Router::new().nest("/todos", todos), &config.cors)?;
//! create_production_app(router, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    CheckStatus, HealthCheckFuture, HealthResponse, ReadyResponse, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{
    AppError, ErrorCode, ErrorDetails, ErrorResponse, FieldErrors, INTERNAL_ERROR_DETAILS,
    field_errors,
};

pub use extractors::{IdPath, JsonBody};
