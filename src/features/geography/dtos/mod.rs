mod geography_dto;

pub use geography_dto::*;
