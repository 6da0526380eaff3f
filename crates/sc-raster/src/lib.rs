pub mod canvas;
pub mod ppm;

pub use canvas::{Canvas, CanvasConfig, CanvasState};
pub use ppm::encode_ppm;

// Re-export the value types so downstream crates don't need a direct dependency
pub use sc_core::{Color, ColorError, Vector2};
