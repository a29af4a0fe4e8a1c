use sqlx::FromRow;

/// Database model for an item category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Item {
    pub id: i32,
    pub title: String,
    /// Stored image file name, relative to the uploads directory
    pub image: String,
}
