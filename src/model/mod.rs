pub mod blend_mode;
pub mod brush;
pub mod color;
pub mod mesh;

// Re-export commonly used types at the model level.
pub use blend_mode::BlendMode;
pub use brush::Brush;
pub use color::{Color, ParseColorError};
pub use mesh::FaceMesh;
