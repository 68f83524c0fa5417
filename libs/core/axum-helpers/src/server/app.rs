use super::shutdown::shutdown_signal;
use crate::errors::handlers::{method_not_allowed, not_found, panic_response};
use crate::http::{cors::create_cors_layer, security::security_headers};
use axum::{Router, middleware};
use core_config::{cors::CorsConfig, server::ServerConfig};
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Combines API routes with documentation and cross-cutting middleware.
///
/// Adds:
/// - OpenAPI viewers: Swagger UI (`/swagger-ui`, spec at `/api-docs/openapi.json`),
///   ReDoc (`/redoc`), RapiDoc (`/rapidoc`) and Scalar (`/scalar`)
/// - 404 and 405 fallbacks in the standard error body
/// - panic recovery into a 500 error body
/// - request tracing, security headers, CORS and response compression
///
/// `apis` is merged at the root, so its paths are served as written. State
/// must already be applied. Health endpoints are added by the app.
///
/// # Errors
/// Returns an error if the CORS origins are empty or invalid.
pub fn create_router<T>(apis: Router, cors: &CorsConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(cors)?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts; `cleanup` is
/// abandoned with a warning if it takes longer than `shutdown_timeout`.
///
/// ```ignore
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorCode, ErrorResponse};
    use axum::{
        body::Body,
        extract::Request,
        http::{StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API"))]
    struct TestDoc;

    fn router() -> Router {
        let apis = Router::new()
            .route("/things", get(|| async { "[]" }))
            .route(
                "/boom",
                get(|| async {
                    if true {
                        panic!("handler exploded");
                    }
                    "unreachable"
                }),
            );
        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:4200".to_string()],
        };
        create_router::<TestDoc>(apis, &cors).unwrap()
    }

    async fn send(method: &str, uri: &str) -> axum::response::Response {
        router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn error_body(response: axum::response::Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_routes_are_served_at_root() {
        let response = send("GET", "/things").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_error_body() {
        let response = send("GET", "/nope").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = error_body(response).await;
        assert_eq!(body.status, 404);
        assert_eq!(body.error, ErrorCode::NotFound.default_message());
    }

    #[tokio::test]
    async fn test_wrong_method_is_405_error_body() {
        let response = send("DELETE", "/things").await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = error_body(response).await;
        assert_eq!(body.status, 405);
    }

    #[tokio::test]
    async fn test_panic_becomes_500_error_body() {
        let response = send("GET", "/boom").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = error_body(response).await;
        assert_eq!(body.error, ErrorCode::InternalError.default_message());
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = send("GET", "/api-docs/openapi.json").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_empty_cors_is_rejected() {
        let cors = CorsConfig {
            allowed_origins: vec![],
        };
        assert!(create_router::<TestDoc>(Router::new(), &cors).is_err());
    }
}
