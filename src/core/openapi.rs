use utoipa::{Modify, OpenApi};

use crate::features::geography::handlers as geography_handlers;
use crate::features::items::{dtos as items_dtos, handlers as items_handlers};
use crate::features::points::{dtos as points_dtos, handlers as points_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Items
        items_handlers::list_items,
        // Points
        points_handlers::create_point,
        points_handlers::get_point,
        points_handlers::list_points,
        // Regions
        geography_handlers::list_regions,
        geography_handlers::list_region_cities,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Items
            items_dtos::ItemResponseDto,
            // Points
            points_dtos::CreatePointFormDto,
            points_dtos::PointResponseDto,
            points_dtos::PointItemDto,
            points_dtos::PointDetailResponseDto,
        )
    ),
    tags(
        (name = "items", description = "Collectible item categories"),
        (name = "points", description = "Collection points"),
        (name = "regions", description = "Region codes and cities from the geography service"),
    ),
    info(
        title = "Ecoleta API",
        version = "0.1.0",
        description = "Waste collection points marketplace",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/items", "/points", "/points/{id}", "/regions", "/regions/{uf}/cities"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Coleta".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Coleta");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
