use std::fmt;

use serde::Serialize;
use ts_rs::TS;

/// Structured error type for everything around the blender. The blend itself
/// never fails; these cover the host-facing conditions of a paint stroke and
/// the settings/mesh files.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "code", content = "detail")]
#[ts(export)]
pub enum PaintError {
    /// The mesh has no active corner color attribute.
    NoColorLayer,
    FaceOutOfRange { face: usize, face_count: usize },
    InvalidMesh { message: String },
    ValidationError { message: String },
    IoError { message: String },
    JsonError { message: String },
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintError::NoColorLayer => write!(f, "No vertex color attribute layer"),
            PaintError::FaceOutOfRange { face, face_count } => {
                write!(f, "Face index {face} out of range (mesh has {face_count} faces)")
            }
            PaintError::InvalidMesh { message } => write!(f, "Invalid mesh: {message}"),
            PaintError::ValidationError { message } => write!(f, "{message}"),
            PaintError::IoError { message } => write!(f, "I/O error: {message}"),
            PaintError::JsonError { message } => write!(f, "JSON error: {message}"),
        }
    }
}

impl std::error::Error for PaintError {}

impl From<std::io::Error> for PaintError {
    fn from(e: std::io::Error) -> Self {
        PaintError::IoError {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for PaintError {
    fn from(e: serde_json::Error) -> Self {
        PaintError::JsonError {
            message: e.to_string(),
        }
    }
}

impl From<crate::model::ParseColorError> for PaintError {
    fn from(e: crate::model::ParseColorError) -> Self {
        PaintError::ValidationError {
            message: e.to_string(),
        }
    }
}

/// Allow converting PaintError to String for callers that report plain text.
impl From<PaintError> for String {
    fn from(e: PaintError) -> String {
        e.to_string()
    }
}

impl From<String> for PaintError {
    fn from(s: String) -> Self {
        PaintError::ValidationError { message: s }
    }
}

impl From<&str> for PaintError {
    fn from(s: &str) -> Self {
        PaintError::ValidationError {
            message: s.to_string(),
        }
    }
}
