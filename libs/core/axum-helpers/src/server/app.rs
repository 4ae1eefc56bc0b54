use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::security_headers;
use axum::{middleware, Router};
use core_config::server::ServerConfig;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

/// Wrap domain routes with documentation and cross-cutting middleware.
///
/// - API routes nested under `/api`
/// - Swagger UI at `/swagger-ui`, ReDoc at `/redoc`, RapiDoc at `/rapidoc`,
///   Scalar at `/scalar`, raw spec at `/api-docs/openapi.json`
/// - request tracing spans, security headers, response compression
/// - JSON 404 and 405 fallbacks
///
/// Domain routers are expected to carry their own state already.
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(CompressionLayer::new())
}

/// Serve `router` with coordinated shutdown.
///
/// On SIGINT/SIGTERM the server stops accepting connections and drains
/// in-flight requests while `cleanup` runs, bounded by
/// `server_config.shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let cleanup_coordinator = coordinator.clone();
    let shutdown_timeout = server_config.shutdown_timeout;

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        cleanup_coordinator.wait().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    cleanup_handle.await.ok();

    serve_result
}
