use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::geography::handlers;
use crate::features::geography::services::GeographyService;

/// Create routes for the geography proxy
pub fn routes(service: Arc<GeographyService>) -> Router {
    Router::new()
        .route("/regions", get(handlers::list_regions))
        .route("/regions/{uf}/cities", get(handlers::list_region_cities))
        .with_state(service)
}
