use std::sync::Arc;

use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::features::points::dtos::{
    CreatePointDto, ImageUpload, PointDetailResponseDto, PointItemDto, PointResponseDto,
    SearchPointsQuery,
};
use crate::features::points::models::NewPoint;
use crate::features::points::repositories::PointRepository;
use crate::modules::storage::UploadStorage;
use crate::shared::constants::POINT_NOT_FOUND;
use crate::shared::validation::parse_item_ids;

/// Service for registering and querying collection points
pub struct PointService {
    repository: Arc<dyn PointRepository>,
    storage: Arc<UploadStorage>,
    max_upload_size: usize,
}

impl PointService {
    pub fn new(
        repository: Arc<dyn PointRepository>,
        storage: Arc<UploadStorage>,
        max_upload_size: usize,
    ) -> Self {
        Self {
            repository,
            storage,
            max_upload_size,
        }
    }

    /// Largest accepted image, in bytes
    pub fn max_upload_size(&self) -> usize {
        self.max_upload_size
    }

    /// Register a point with its accepted items.
    ///
    /// The form must already have passed `Validate`. The image is stored
    /// first; if the database transaction fails the stored file is removed
    /// again and the error is returned.
    pub async fn create(
        &self,
        dto: CreatePointDto,
        image: ImageUpload,
    ) -> Result<PointResponseDto> {
        let (latitude, longitude) = dto.coordinates()?;

        let item_ids = parse_item_ids(&dto.items)?;
        if item_ids.is_empty() {
            return Err(AppError::Validation(
                "items must contain at least one item id".to_string(),
            ));
        }

        let stored_image = self.storage.save(&image.file_name, &image.data).await?;

        let new_point = NewPoint {
            image: stored_image.clone(),
            name: dto.name,
            email: dto.email,
            whatsapp: dto.whatsapp,
            latitude,
            longitude,
            city: dto.city,
            uf: dto.uf,
        };

        let point = match self.repository.create_with_items(new_point, &item_ids).await {
            Ok(point) => point,
            Err(e) => {
                if let Err(cleanup) = self.storage.remove(&stored_image).await {
                    warn!(
                        "Failed to remove orphaned upload {}: {}",
                        stored_image, cleanup
                    );
                }
                return Err(e);
            }
        };

        info!(
            "Point registered: id={}, city={}, uf={}, items={:?}",
            point.id, point.city, point.uf, item_ids
        );

        Ok(PointResponseDto::from_point(point, &self.storage))
    }

    /// Get a point with the titles of the items it accepts
    pub async fn get(&self, id: i32) -> Result<PointDetailResponseDto> {
        let point = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(POINT_NOT_FOUND.to_string()))?;

        let items = self
            .repository
            .item_titles(point.id)
            .await?
            .into_iter()
            .map(|title| PointItemDto { title })
            .collect();

        Ok(PointDetailResponseDto {
            point: PointResponseDto::from_point(point, &self.storage),
            items,
        })
    }

    /// Points in a city/uf accepting any of the requested items
    pub async fn search(&self, query: SearchPointsQuery) -> Result<Vec<PointResponseDto>> {
        let item_ids = parse_item_ids(&query.items)?;
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let points = self
            .repository
            .search(&query.city, &query.uf, &item_ids)
            .await?;

        tracing::debug!(
            "Point search city={} uf={} items={:?} -> {} results",
            query.city,
            query.uf,
            item_ids,
            points.len()
        );

        Ok(points
            .into_iter()
            .map(|p| PointResponseDto::from_point(p, &self.storage))
            .collect())
    }
}
