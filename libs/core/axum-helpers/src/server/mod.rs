//! Server infrastructure: router assembly, health endpoint, graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let app = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{health_router, HealthResponse};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
