use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::geography::services::GeographyService;
use crate::shared::types::ErrorResponse;

/// List all region codes
#[utoipa::path(
    get,
    path = "/regions",
    responses(
        (status = 200, description = "Region codes sorted alphabetically", body = Vec<String>),
        (status = 502, description = "Geography service unavailable", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<GeographyService>>,
) -> Result<Json<Vec<String>>> {
    let codes = service.list_region_codes().await?;
    Ok(Json(codes))
}

/// List the cities of a region
#[utoipa::path(
    get,
    path = "/regions/{uf}/cities",
    params(
        ("uf" = String, Path, description = "Two-letter region code")
    ),
    responses(
        (status = 200, description = "City names", body = Vec<String>),
        (status = 502, description = "Geography service unavailable", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_region_cities(
    State(service): State<Arc<GeographyService>>,
    AppPath(uf): AppPath<String>,
) -> Result<Json<Vec<String>>> {
    let cities = service.list_sub_regions(&uf).await?;
    Ok(Json(cities))
}
