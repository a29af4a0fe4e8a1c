mod geography_handler;

pub use geography_handler::*;
