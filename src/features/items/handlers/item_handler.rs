use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::items::dtos::ItemResponseDto;
use crate::features::items::services::ItemService;
use crate::shared::types::ErrorResponse;

/// List all item categories
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "List of item categories", body = Vec<ItemResponseDto>),
        (status = 500, description = "Storage unavailable", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_items(
    State(service): State<Arc<ItemService>>,
) -> Result<Json<Vec<ItemResponseDto>>> {
    let items = service.list().await?;
    Ok(Json(items))
}
