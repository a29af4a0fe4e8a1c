use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::items::models::Item;

/// Read access to the item catalog
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items ordered by id
    async fn list(&self) -> Result<Vec<Item>>;
}

pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn list(&self) -> Result<Vec<Item>> {
        sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, image
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list items: {:?}", e);
            AppError::Database(e)
        })
    }
}
