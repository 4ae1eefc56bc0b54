//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: router assembly with OpenAPI docs, `/health`, graceful shutdown
//! - **[`http`]**: response middleware (security headers)
//! - **[`errors`]**: `AppError`, error codes and the JSON error envelope
//! - **[`extractors`]**: positive integer ids, path text, query strings, validated JSON bodies
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new());
//!     create_production_app(router, &ServerConfig::default(), async {}).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    create_production_app, create_router, health_router, shutdown_signal,
    HealthResponse, ShutdownCoordinator,
};

pub use http::security_headers;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, QueryParams, TextPath, ValidatedJson};
