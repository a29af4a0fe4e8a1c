use std::sync::Arc;

use crate::core::error::Result;
use crate::features::items::dtos::ItemResponseDto;
use crate::features::items::repositories::ItemRepository;
use crate::modules::storage::UploadStorage;

/// Service for the item catalog
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
    storage: Arc<UploadStorage>,
}

impl ItemService {
    pub fn new(repository: Arc<dyn ItemRepository>, storage: Arc<UploadStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    /// List every item with its image URL
    pub async fn list(&self) -> Result<Vec<ItemResponseDto>> {
        let items = self.repository.list().await?;

        tracing::debug!("Listed {} items", items.len());

        Ok(items
            .into_iter()
            .map(|item| ItemResponseDto::from_item(item, &self.storage))
            .collect())
    }
}
