use std::ops::Range;

use crate::error::PaintError;
use crate::model::{Brush, Color};

use super::mixer;

/// Host-side mesh data the painter writes into.
///
/// Implemented by whatever owns the mesh: a host binding, or [`crate::model::FaceMesh`]
/// for headless use.
pub trait PaintTarget {
    fn face_count(&self) -> usize;

    /// Corner indices belonging to `face`, or `None` if the face doesn't exist.
    fn face_corners(&self, face: usize) -> Option<Range<usize>>;

    /// The active corner color layer, indexed by corner.
    fn corner_colors_mut(&mut self) -> Option<&mut [Color]>;
}

/// Paint every corner of `face` with `brush`. Returns the number of corners written.
///
/// With `apply_alpha` set, each corner's alpha is replaced by the brush's
/// stroke alpha before blending; the blend itself never touches alpha.
pub fn paint_face<T: PaintTarget + ?Sized>(
    target: &mut T,
    face: usize,
    brush: &Brush,
) -> Result<usize, PaintError> {
    let face_count = target.face_count();
    let corners = target.face_corners(face);

    let colors = target.corner_colors_mut().ok_or(PaintError::NoColorLayer)?;
    let corners = corners.ok_or(PaintError::FaceOutOfRange { face, face_count })?;
    let layer_len = colors.len();
    let face_colors = colors
        .get_mut(corners.clone())
        .ok_or_else(|| PaintError::InvalidMesh {
            message: format!(
                "face {face} corners {}..{} exceed color layer of {layer_len}",
                corners.start, corners.end
            ),
        })?;

    for color in face_colors.iter_mut() {
        *color = paint_corner(*color, brush);
    }

    tracing::debug!(
        face,
        corners = face_colors.len(),
        mode = %brush.blend_mode,
        "painted face"
    );
    Ok(face_colors.len())
}

/// New color for one corner under `brush`.
pub fn paint_corner(current: Color, brush: &Brush) -> Color {
    let base = if brush.apply_alpha {
        current.with_alpha(brush.stroke_alpha())
    } else {
        current
    };
    mixer::blend(base, brush.color, brush.strength, brush.blend_mode)
}
