//! Products API routes

use axum::Router;
use domain_products::{handlers, seed, ProductRepository, ProductService};
use tracing::info;

/// Create products router
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    handlers::router(service)
}

/// Load the demo catalog into an empty store
pub async fn seed_demo_catalog<R: ProductRepository>(
    service: &ProductService<R>,
) -> eyre::Result<()> {
    let created = service.seed(seed::demo_catalog()).await?;
    info!("Seeded {} demo products", created);
    Ok(())
}
