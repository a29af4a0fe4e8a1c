pub mod geography;
pub mod items;
pub mod points;
