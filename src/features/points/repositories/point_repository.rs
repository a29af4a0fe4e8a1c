use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::points::models::{NewPoint, Point};

/// Persistence for points and their item associations
#[async_trait]
pub trait PointRepository: Send + Sync {
    /// Insert a point and one association per item id, atomically.
    /// On error nothing is persisted.
    async fn create_with_items(&self, point: NewPoint, item_ids: &[i32]) -> Result<Point>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Point>>;

    /// Titles of the items associated with a point, ordered by item id
    async fn item_titles(&self, point_id: i32) -> Result<Vec<String>>;

    /// Distinct points in `city`/`uf` accepting at least one of `item_ids`
    async fn search(&self, city: &str, uf: &str, item_ids: &[i32]) -> Result<Vec<Point>>;
}

pub struct PgPointRepository {
    pool: PgPool,
}

impl PgPointRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PointRepository for PgPointRepository {
    async fn create_with_items(&self, point: NewPoint, item_ids: &[i32]) -> Result<Point> {
        // Dropping `tx` without commit rolls back, so every `?` below is all-or-nothing
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin point transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let created = sqlx::query_as::<_, Point>(
            r#"
            INSERT INTO points (image, name, email, whatsapp, latitude, longitude, city, uf)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, image, name, email, whatsapp, latitude, longitude, city, uf
            "#,
        )
        .bind(&point.image)
        .bind(&point.name)
        .bind(&point.email)
        .bind(&point.whatsapp)
        .bind(point.latitude)
        .bind(point.longitude)
        .bind(&point.city)
        .bind(&point.uf)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert point: {:?}", e);
            AppError::Database(e)
        })?;

        if !item_ids.is_empty() {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO point_items (point_id, item_id) ");
            builder.push_values(item_ids, |mut row, item_id| {
                row.push_bind(created.id).push_bind(*item_id);
            });

            builder.build().execute(&mut *tx).await.map_err(|e| {
                tracing::error!(
                    "Failed to insert items for point {}: {:?}",
                    created.id,
                    e
                );
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit point {}: {:?}", created.id, e);
            AppError::Database(e)
        })?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Point>> {
        sqlx::query_as::<_, Point>(
            r#"
            SELECT id, image, name, email, whatsapp, latitude, longitude, city, uf
            FROM points
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get point by id: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn item_titles(&self, point_id: i32) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT items.title
            FROM items
            JOIN point_items ON items.id = point_items.item_id
            WHERE point_items.point_id = $1
            ORDER BY items.id
            "#,
        )
        .bind(point_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list items of point {}: {:?}", point_id, e);
            AppError::Database(e)
        })
    }

    async fn search(&self, city: &str, uf: &str, item_ids: &[i32]) -> Result<Vec<Point>> {
        sqlx::query_as::<_, Point>(
            r#"
            SELECT DISTINCT points.id, points.image, points.name, points.email, points.whatsapp,
                   points.latitude, points.longitude, points.city, points.uf
            FROM points
            JOIN point_items ON points.id = point_items.point_id
            WHERE point_items.item_id = ANY($1)
              AND points.city = $2
              AND points.uf = $3
            ORDER BY points.id
            "#,
        )
        .bind(item_ids)
        .bind(city)
        .bind(uf)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search points: {:?}", e);
            AppError::Database(e)
        })
    }
}
