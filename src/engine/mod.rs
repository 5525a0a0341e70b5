pub mod mixer;
pub mod painter;
pub mod stroke;

pub use mixer::blend;
pub use painter::{paint_corner, paint_face, PaintTarget};
pub use stroke::{PaintSession, Stroke, StrokeEvent, StrokeStatus};
