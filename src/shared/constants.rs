/// Route prefix under which uploaded images are served
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Message returned when a point id does not exist
pub const POINT_NOT_FOUND: &str = "point not found";

/// Image MIME types accepted for point uploads
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Check if an upload content type is an accepted image
pub fn is_image_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}
