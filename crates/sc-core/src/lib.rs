pub mod color;
pub mod vector;

pub use color::{Color, ColorError};
pub use vector::Vector2;
