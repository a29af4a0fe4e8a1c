//! Collection points and the item categories they accept.
//!
//! A point is registered once, together with its item associations, inside
//! a single database transaction. Points are never updated or deleted.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/points` | Register a point (multipart form with image) |
//! | GET | `/points` | Search points by city, uf and item ids |
//! | GET | `/points/{id}` | Get a point with the titles of its items |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgPointRepository;
pub use services::PointService;
