//! In-memory repositories and fixtures for service and handler tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::items::models::Item;
use crate::features::items::repositories::ItemRepository;
use crate::features::points::dtos::{CreatePointDto, ImageUpload};
use crate::features::points::models::{NewPoint, Point};
use crate::features::points::repositories::PointRepository;
use crate::modules::storage::UploadStorage;

pub const TEST_PUBLIC_URL: &str = "http://localhost:3333";

/// The seeded item catalog
pub fn sample_items() -> Vec<Item> {
    [
        (1, "Lâmpadas", "lampadas.svg"),
        (2, "Pilhas e Baterias", "baterias.svg"),
        (3, "Papéis e Papelão", "papeis-papelao.svg"),
        (4, "Resíduos Eletrônicos", "eletronicos.svg"),
        (5, "Resíduos Orgânicos", "organicos.svg"),
        (6, "Óleo de Cozinha", "oleo.svg"),
    ]
    .into_iter()
    .map(|(id, title, image)| Item {
        id,
        title: title.to_string(),
        image: image.to_string(),
    })
    .collect()
}

/// Upload storage rooted in a fresh temporary directory
pub fn test_storage() -> Arc<UploadStorage> {
    let root = std::env::temp_dir().join(format!("ecoleta-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&root).unwrap();
    Arc::new(UploadStorage::with_root(root, TEST_PUBLIC_URL))
}

/// A valid registration form with generated contact data and items "1,2"
pub fn create_point_dto(city: &str, uf: &str) -> CreatePointDto {
    CreatePointDto {
        name: CompanyName().fake(),
        email: SafeEmail().fake(),
        whatsapp: PhoneNumber().fake(),
        city: city.to_string(),
        uf: uf.to_string(),
        latitude: "-8.0476".to_string(),
        longitude: "-34.8770".to_string(),
        items: "1,2".to_string(),
    }
}

pub fn png_upload() -> ImageUpload {
    ImageUpload {
        file_name: "point.png".to_string(),
        content_type: "image/png".to_string(),
        data: vec![0x89, b'P', b'N', b'G'],
    }
}

fn unavailable_error() -> AppError {
    AppError::Database(sqlx::Error::PoolClosed)
}

pub struct InMemoryItemRepository {
    items: Vec<Item>,
    available: bool,
}

impl InMemoryItemRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            available: true,
        }
    }

    /// Repository whose every call fails like an unreachable database
    pub fn unavailable() -> Self {
        Self {
            items: Vec::new(),
            available: false,
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>> {
        if !self.available {
            return Err(unavailable_error());
        }
        let mut items = self.items.clone();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }
}

#[derive(Default)]
struct PointTables {
    points: Vec<Point>,
    /// (point_id, item_id)
    point_items: Vec<(i32, i32)>,
    last_id: i32,
}

/// Point repository that applies each creation atomically under one lock,
/// rejecting unknown item ids like a foreign key would
pub struct InMemoryPointRepository {
    items: Vec<Item>,
    tables: Mutex<PointTables>,
    fail_associations: AtomicBool,
}

impl InMemoryPointRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            tables: Mutex::new(PointTables::default()),
            fail_associations: AtomicBool::new(false),
        }
    }

    /// Make every association insert fail after the point insert
    pub fn fail_association_inserts(&self) {
        self.fail_associations.store(true, Ordering::SeqCst);
    }

    pub fn point_count(&self) -> usize {
        self.tables.lock().unwrap().points.len()
    }

    pub fn association_count(&self, point_id: i32) -> usize {
        self.tables
            .lock()
            .unwrap()
            .point_items
            .iter()
            .filter(|(p, _)| *p == point_id)
            .count()
    }
}

#[async_trait]
impl PointRepository for InMemoryPointRepository {
    async fn create_with_items(&self, point: NewPoint, item_ids: &[i32]) -> Result<Point> {
        let mut tables = self.tables.lock().unwrap();

        // Staged like a transaction: nothing is written until every check passes
        let id = tables.last_id + 1;
        if self.fail_associations.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::Protocol(
                "association insert failed".to_string(),
            )));
        }
        if let Some(unknown) = item_ids
            .iter()
            .find(|item_id| !self.items.iter().any(|i| i.id == **item_id))
        {
            return Err(AppError::Database(sqlx::Error::Protocol(format!(
                "point_items.item_id {} violates foreign key",
                unknown
            ))));
        }

        let created = Point {
            id,
            image: point.image,
            name: point.name,
            email: point.email,
            whatsapp: point.whatsapp,
            latitude: point.latitude,
            longitude: point.longitude,
            city: point.city,
            uf: point.uf,
        };

        tables.last_id = id;
        tables.points.push(created.clone());
        tables
            .point_items
            .extend(item_ids.iter().map(|item_id| (id, *item_id)));

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Point>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.points.iter().find(|p| p.id == id).cloned())
    }

    async fn item_titles(&self, point_id: i32) -> Result<Vec<String>> {
        let tables = self.tables.lock().unwrap();
        let mut items: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| tables.point_items.contains(&(point_id, item.id)))
            .collect();
        items.sort_by_key(|i| i.id);
        Ok(items.into_iter().map(|i| i.title.clone()).collect())
    }

    async fn search(&self, city: &str, uf: &str, item_ids: &[i32]) -> Result<Vec<Point>> {
        let tables = self.tables.lock().unwrap();
        let mut points: Vec<Point> = tables
            .points
            .iter()
            .filter(|p| p.city == city && p.uf == uf)
            .filter(|p| {
                tables
                    .point_items
                    .iter()
                    .any(|(point_id, item_id)| *point_id == p.id && item_ids.contains(item_id))
            })
            .cloned()
            .collect();
        points.sort_by_key(|p| p.id);
        Ok(points)
    }
}
