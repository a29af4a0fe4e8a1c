mod point_dto;

pub use point_dto::*;
