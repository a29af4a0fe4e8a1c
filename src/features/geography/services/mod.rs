mod geography_service;

pub use geography_service::GeographyService;
