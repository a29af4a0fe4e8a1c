use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::items::models::Item;
use crate::modules::storage::UploadStorage;

/// Response DTO for an item category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponseDto {
    pub id: i32,
    pub title: String,
    /// Fully-qualified URL of the item's icon
    #[schema(example = "http://localhost:3333/uploads/lampadas.svg")]
    pub image_url: String,
}

impl ItemResponseDto {
    pub fn from_item(item: Item, storage: &UploadStorage) -> Self {
        Self {
            image_url: storage.public_url(&item.image),
            id: item.id,
            title: item.title,
        }
    }
}
