mod point;

pub use point::{NewPoint, Point};
