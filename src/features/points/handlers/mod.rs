mod point_handler;

pub use point_handler::*;
