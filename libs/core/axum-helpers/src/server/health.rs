use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use core_config::AppInfo;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Liveness probe; 200 whenever the process is serving requests.
pub async fn health_handler(State(app): State<AppInfo>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            name: app.name,
            version: app.version,
        }),
    )
}

/// Router exposing `/health` with the given application metadata.
///
/// ```ignore
/// use axum_helpers::server::health_router;
/// use core_config::app_info;
///
/// let app = router.merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
