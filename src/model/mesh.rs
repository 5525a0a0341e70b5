use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::painter::PaintTarget;
use crate::error::PaintError;

use super::Color;

/// Polygon mesh reduced to what face painting needs: which corners belong to
/// which face, plus the active corner color layer.
///
/// Corners of face `i` are `face_starts[i]..face_starts[i + 1]`, so
/// `face_starts` holds one more entry than there are faces and its last entry
/// is the corner count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceMesh {
    pub face_starts: Vec<usize>,
    /// Active corner color layer, one entry per corner. `None` when the mesh
    /// carries no color attribute.
    #[serde(default)]
    pub color_layer: Option<Vec<Color>>,
}

impl FaceMesh {
    /// Build the corner layout from per-face corner counts. No color layer.
    pub fn from_face_sizes(sizes: &[usize]) -> Self {
        let mut face_starts = Vec::with_capacity(sizes.len() + 1);
        let mut next = 0;
        face_starts.push(next);
        for size in sizes {
            next += size;
            face_starts.push(next);
        }
        Self {
            face_starts,
            color_layer: None,
        }
    }

    /// Attach a color layer with every corner set to `fill`.
    pub fn with_color_layer(mut self, fill: Color) -> Self {
        self.color_layer = Some(vec![fill; self.corner_count()]);
        self
    }

    pub fn corner_count(&self) -> usize {
        self.face_starts.last().copied().unwrap_or(0)
    }

    pub fn color_layer(&self) -> Option<&[Color]> {
        self.color_layer.as_deref()
    }

    /// Colors of one face's corners, if the face and the layer exist.
    pub fn face_colors(&self, face: usize) -> Option<&[Color]> {
        let corners = self.face_corners(face)?;
        self.color_layer.as_deref()?.get(corners)
    }

    /// Check the corner layout and the color layer agree.
    pub fn validate(&self) -> Result<(), PaintError> {
        match self.face_starts.first() {
            Some(0) => {}
            Some(first) => {
                return Err(PaintError::InvalidMesh {
                    message: format!("face_starts must begin at 0, found {first}"),
                })
            }
            None => {
                return Err(PaintError::InvalidMesh {
                    message: "face_starts is empty".into(),
                })
            }
        }

        if let Some(pos) = self.face_starts.windows(2).position(|w| w.first() > w.get(1)) {
            return Err(PaintError::InvalidMesh {
                message: format!("face_starts decreases after face {pos}"),
            });
        }

        if let Some(layer) = &self.color_layer {
            if layer.len() != self.corner_count() {
                return Err(PaintError::InvalidMesh {
                    message: format!(
                        "color layer has {} entries but mesh has {} corners",
                        layer.len(),
                        self.corner_count()
                    ),
                });
            }
        }

        Ok(())
    }

    /// Load and validate a mesh from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PaintError> {
        let mesh: Self = crate::storage::read_json(path)?;
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn save(&self, path: &Path) -> Result<(), PaintError> {
        crate::storage::write_json(path, self)
    }
}

impl PaintTarget for FaceMesh {
    fn face_count(&self) -> usize {
        self.face_starts.len().saturating_sub(1)
    }

    fn face_corners(&self, face: usize) -> Option<Range<usize>> {
        let start = *self.face_starts.get(face)?;
        let end = *self.face_starts.get(face.checked_add(1)?)?;
        Some(start..end)
    }

    fn corner_colors_mut(&mut self) -> Option<&mut [Color]> {
        self.color_layer.as_deref_mut()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn face_sizes_build_offsets() {
        let mesh = FaceMesh::from_face_sizes(&[4, 3, 4]);
        assert_eq!(mesh.face_starts, vec![0, 4, 7, 11]);
        assert_eq!(mesh.face_count(), 3);
        assert_eq!(mesh.corner_count(), 11);
        assert_eq!(mesh.face_corners(1), Some(4..7));
        assert_eq!(mesh.face_corners(3), None);
    }

    #[test]
    fn empty_mesh_has_no_faces() {
        let mesh = FaceMesh::from_face_sizes(&[]);
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.corner_count(), 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn color_layer_is_optional() {
        let mesh = FaceMesh::from_face_sizes(&[3]);
        assert!(mesh.color_layer().is_none());
        let mesh = mesh.with_color_layer(Color::BLACK);
        assert!(mesh.color_layer().is_some());
        assert_eq!(mesh.face_colors(0).unwrap().len(), 3);
    }

    #[test]
    fn validate_rejects_decreasing_offsets() {
        let mesh = FaceMesh {
            face_starts: vec![0, 4, 2],
            color_layer: None,
        };
        assert!(matches!(mesh.validate(), Err(PaintError::InvalidMesh { .. })));
    }

    #[test]
    fn validate_rejects_nonzero_start_and_empty_offsets() {
        let mesh = FaceMesh {
            face_starts: vec![1, 4],
            color_layer: None,
        };
        assert!(mesh.validate().is_err());
        let mesh = FaceMesh {
            face_starts: vec![],
            color_layer: None,
        };
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn validate_rejects_mismatched_layer() {
        let mut mesh = FaceMesh::from_face_sizes(&[4]).with_color_layer(Color::WHITE);
        mesh.color_layer.as_mut().unwrap().pop();
        assert!(matches!(mesh.validate(), Err(PaintError::InvalidMesh { .. })));
    }

    #[test]
    fn load_round_trip() {
        let dir = std::env::temp_dir().join("vertex_face_paint_test_mesh");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mesh.json");

        let mesh = FaceMesh::from_face_sizes(&[3, 4]).with_color_layer(Color::BLACK);
        mesh.save(&path).unwrap();
        let loaded = FaceMesh::load(&path).unwrap();
        assert_eq!(loaded, mesh);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_invalid_mesh_file() {
        let dir = std::env::temp_dir().join("vertex_face_paint_test_bad_mesh");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mesh.json");
        std::fs::write(&path, r#"{ "face_starts": [0, 3], "color_layer": [] }"#).unwrap();

        assert!(matches!(FaceMesh::load(&path), Err(PaintError::InvalidMesh { .. })));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
