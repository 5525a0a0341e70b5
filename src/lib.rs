//! Face-based vertex color painting.
//!
//! The core is [`engine::mixer::blend`], a pure per-corner color blend. Around
//! it sit the brush model, a face painter writing through the [`PaintTarget`]
//! seam, the stroke tracker deciding when to paint, and persisted settings.

pub mod engine;
pub mod error;
pub mod model;
pub mod paths;
pub mod settings;
pub mod storage;
pub mod util;

pub use engine::{blend, paint_face, PaintSession, PaintTarget, Stroke, StrokeEvent, StrokeStatus};
pub use error::PaintError;
pub use model::{BlendMode, Brush, Color, FaceMesh};
