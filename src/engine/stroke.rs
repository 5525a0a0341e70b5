use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::PaintError;
use crate::model::Brush;

use super::painter::{paint_face, PaintTarget};

/// Input event of a stroke, already translated from the host's event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StrokeEvent {
    /// Pointer moved while the button is held.
    Move,
    /// Paint button released.
    Release,
    /// Right click or escape.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StrokeStatus {
    Running,
    Finished,
    Cancelled,
}

/// Tracks one press → drag → release interaction and decides when to paint.
///
/// A drag paints on every move and not again on release. A click with no
/// movement paints once, on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    did_paint: bool,
    status: StrokeStatus,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new()
    }
}

impl Stroke {
    pub fn new() -> Self {
        Self {
            did_paint: false,
            status: StrokeStatus::Running,
        }
    }

    pub fn status(&self) -> StrokeStatus {
        self.status
    }

    /// Advance with `event`. Returns true when the caller should paint now.
    pub fn advance(&mut self, event: StrokeEvent) -> bool {
        if self.status != StrokeStatus::Running {
            return false;
        }
        match event {
            StrokeEvent::Move => {
                self.did_paint = true;
                true
            }
            StrokeEvent::Release => {
                let paint = !self.did_paint;
                self.did_paint = false;
                self.status = StrokeStatus::Finished;
                paint
            }
            StrokeEvent::Cancel => {
                self.did_paint = false;
                self.status = StrokeStatus::Cancelled;
                false
            }
        }
    }
}

/// One stroke applied to a target with a fixed brush.
///
/// The host performs its own ray cast per event and passes the hit face (or
/// `None` on a miss) to [`PaintSession::handle`].
pub struct PaintSession<'a, T: PaintTarget + ?Sized> {
    target: &'a mut T,
    brush: Brush,
    stroke: Stroke,
    faces_painted: usize,
}

impl<'a, T: PaintTarget + ?Sized> PaintSession<'a, T> {
    /// Start a stroke. Fails when the target has no color layer to paint into.
    pub fn begin(target: &'a mut T, brush: Brush) -> Result<Self, PaintError> {
        if target.corner_colors_mut().is_none() {
            tracing::warn!("stroke refused: no vertex color attribute layer");
            return Err(PaintError::NoColorLayer);
        }
        Ok(Self {
            target,
            brush,
            stroke: Stroke::new(),
            faces_painted: 0,
        })
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn status(&self) -> StrokeStatus {
        self.stroke.status()
    }

    /// Number of face paints applied so far. Repeated hits on one face count each time.
    pub fn faces_painted(&self) -> usize {
        self.faces_painted
    }

    pub fn handle(&mut self, event: StrokeEvent, hit: Option<usize>) -> Result<StrokeStatus, PaintError> {
        if self.stroke.advance(event) {
            if let Some(face) = hit {
                paint_face(&mut *self.target, face, &self.brush)?;
                self.faces_painted += 1;
            }
        }

        match self.stroke.status() {
            StrokeStatus::Running => {}
            status => tracing::debug!(?status, faces = self.faces_painted, "stroke ended"),
        }
        Ok(self.stroke.status())
    }
}
