//! Collectible item categories.
//!
//! Items are reference data seeded with the database; this feature only
//! reads them.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/items` | List all item categories with their image URLs |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgItemRepository;
pub use services::ItemService;
