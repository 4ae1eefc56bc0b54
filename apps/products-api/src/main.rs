//! Products API - REST server for the product catalog

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{InMemoryProductRepository, ProductService};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let service = ProductService::new(InMemoryProductRepository::new());

    if config.seed_catalog {
        api::products::seed_demo_catalog(&service).await?;
    }

    // Build REST router
    let api_routes = api::routes(service);
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(config.app));

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(app, &config.server, async {
        info!("Shutting down: in-memory catalog discarded");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
