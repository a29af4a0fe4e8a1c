use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::points::models::Point;
use crate::modules::storage::UploadStorage;

/// Text fields of the point registration form.
///
/// Built from multipart fields; absent fields are left empty so that the
/// `required` rules below report them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePointDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "email is required"),
        email(message = "email must be a valid email")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "whatsapp is required"))]
    pub whatsapp: String,

    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,

    #[validate(length(equal = 2, message = "uf must be exactly 2 characters"))]
    pub uf: String,

    #[validate(length(min = 1, message = "latitude is required"))]
    pub latitude: String,

    #[validate(length(min = 1, message = "longitude is required"))]
    pub longitude: String,

    /// Comma-separated item ids, e.g. "1,2,6"
    #[validate(regex(
        path = "*crate::shared::validation::ITEM_IDS_REGEX",
        message = "items must be a comma-separated list of item ids"
    ))]
    pub items: String,
}

impl CreatePointDto {
    /// Assign a multipart text field by name. Returns false for unknown names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "whatsapp" => &mut self.whatsapp,
            "city" => &mut self.city,
            "uf" => &mut self.uf,
            "latitude" => &mut self.latitude,
            "longitude" => &mut self.longitude,
            "items" => &mut self.items,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Latitude and longitude coerced to numbers
    pub fn coordinates(&self) -> Result<(f64, f64)> {
        Ok((
            parse_coordinate("latitude", &self.latitude)?,
            parse_coordinate("longitude", &self.longitude)?,
        ))
    }
}

fn parse_coordinate(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::Validation(format!("{} must be a number", field)))
}

/// Uploaded image as received from the multipart form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Multipart form for point registration (OpenAPI documentation only;
/// the handler reads the fields with axum's Multipart extractor)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreatePointFormDto {
    #[schema(example = "Mercado Verde")]
    pub name: String,
    #[schema(example = "contato@mercadoverde.com.br")]
    pub email: String,
    #[schema(example = "5511999999999")]
    pub whatsapp: String,
    #[schema(example = "São Paulo")]
    pub city: String,
    #[schema(example = "SP")]
    pub uf: String,
    #[schema(example = "-23.5505")]
    pub latitude: String,
    #[schema(example = "-46.6333")]
    pub longitude: String,
    /// Comma-separated item ids
    #[schema(example = "1,2,6")]
    pub items: String,
    /// Point image
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: String,
}

/// Response DTO for a collection point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointResponseDto {
    pub id: i32,
    /// Stored image file name
    pub image: String,
    /// Fully-qualified URL of the image
    pub image_url: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

impl PointResponseDto {
    pub fn from_point(point: Point, storage: &UploadStorage) -> Self {
        Self {
            image_url: storage.public_url(&point.image),
            id: point.id,
            image: point.image,
            name: point.name,
            email: point.email,
            whatsapp: point.whatsapp,
            latitude: point.latitude,
            longitude: point.longitude,
            city: point.city,
            uf: point.uf,
        }
    }
}

/// Item title attached to a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointItemDto {
    pub title: String,
}

/// Response DTO for a single point with its accepted items
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointDetailResponseDto {
    pub point: PointResponseDto,
    pub items: Vec<PointItemDto>,
}

/// Query params for searching points
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchPointsQuery {
    /// City name, matched exactly
    #[serde(default)]
    pub city: String,
    /// Two-letter region code, matched exactly
    #[serde(default)]
    pub uf: String,
    /// Comma-separated item ids; a point matches if it accepts any of them
    #[serde(default)]
    pub items: String,
}
