use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::points::dtos::{
    CreatePointDto, CreatePointFormDto, ImageUpload, PointDetailResponseDto, PointResponseDto,
    SearchPointsQuery,
};
use crate::features::points::services::PointService;
use crate::shared::constants::{is_image_type_allowed, ALLOWED_IMAGE_TYPES};
use crate::shared::types::ErrorResponse;

/// Register a collection point
///
/// Accepts multipart/form-data with the point's contact and location fields,
/// `items` as comma-separated item ids, and `image` as the point picture.
#[utoipa::path(
    post,
    path = "/points",
    tag = "points",
    request_body(
        content = CreatePointFormDto,
        content_type = "multipart/form-data",
        description = "Point registration form with image",
    ),
    responses(
        (status = 200, description = "Point registered", body = PointResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_point(
    State(service): State<Arc<PointService>>,
    mut multipart: Multipart,
) -> Result<Json<PointResponseDto>> {
    let mut dto = CreatePointDto::default();
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == "image" {
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let file_name = field
                .file_name()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "image".to_string());

            let data = field.bytes().await.map_err(|e| {
                debug!("Failed to read image bytes: {}", e);
                AppError::BadRequest(format!("Failed to read image data: {}", e))
            })?;

            image = Some(ImageUpload {
                file_name,
                content_type,
                data: data.to_vec(),
            });
            continue;
        }

        let text = field.text().await.map_err(|e| {
            AppError::BadRequest(format!("Failed to read field '{}': {}", field_name, e))
        })?;

        if !dto.set_field(&field_name, text) {
            debug!("Ignoring unknown field: {}", field_name);
        }
    }

    dto.validate()?;

    let image = image.ok_or_else(|| AppError::Validation("image is required".to_string()))?;

    if image.data.is_empty() {
        return Err(AppError::Validation("image must not be empty".to_string()));
    }

    if image.data.len() > service.max_upload_size() {
        return Err(AppError::Validation(format!(
            "image too large. Maximum size is {} bytes",
            service.max_upload_size()
        )));
    }

    if !is_image_type_allowed(&image.content_type) {
        return Err(AppError::Validation(format!(
            "image type '{}' is not allowed. Allowed types: {}",
            image.content_type,
            ALLOWED_IMAGE_TYPES.join(", ")
        )));
    }

    let point = service.create(dto, image).await?;

    Ok(Json(point))
}

/// Get a collection point with the titles of the items it accepts
#[utoipa::path(
    get,
    path = "/points/{id}",
    tag = "points",
    params(
        ("id" = i32, Path, description = "Point id")
    ),
    responses(
        (status = 200, description = "Point found", body = PointDetailResponseDto),
        (status = 400, description = "Point not found", body = ErrorResponse)
    )
)]
pub async fn get_point(
    State(service): State<Arc<PointService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<PointDetailResponseDto>> {
    let point = service.get(id).await?;
    Ok(Json(point))
}

/// Search collection points
///
/// Returns the distinct points in `city`/`uf` that accept at least one of
/// the given item ids.
#[utoipa::path(
    get,
    path = "/points",
    tag = "points",
    params(SearchPointsQuery),
    responses(
        (status = 200, description = "Matching points", body = Vec<PointResponseDto>),
        (status = 400, description = "Malformed item id list", body = ErrorResponse)
    )
)]
pub async fn list_points(
    State(service): State<Arc<PointService>>,
    AppQuery(query): AppQuery<SearchPointsQuery>,
) -> Result<Json<Vec<PointResponseDto>>> {
    let points = service.search(query).await?;
    Ok(Json(points))
}
