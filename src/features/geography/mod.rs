//! Region codes (UFs) and their cities from the external geography service.
//!
//! The backend proxies the two lookups the point forms need, and
//! [`selection::RegionSelection`] models the client-side cascade between
//! them.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/regions` | All region codes, sorted |
//! | GET | `/regions/{uf}/cities` | City names of one region |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod selection;
pub mod services;

pub use services::GeographyService;
