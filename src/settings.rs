use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::PaintError;
use crate::model::Brush;
use crate::storage::{read_json, write_json};

/// Tool settings stored in the config directory: the brush used when no
/// host brush state is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
pub struct PaintSettings {
    pub version: u32,
    #[serde(default)]
    pub brush: Brush,
}

const SETTINGS_VERSION: u32 = 1;

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            brush: Brush::default(),
        }
    }
}

/// Load settings from the config directory. Returns None if no settings file
/// exists or it can't be parsed.
///
/// Strength and alpha outside the slider range are clamped back into [0, 1].
pub fn load_settings(app_config_dir: &Path) -> Option<PaintSettings> {
    let path = crate::paths::settings_path(app_config_dir);
    if !path.exists() {
        return None;
    }
    let mut settings = match read_json::<PaintSettings>(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            return None;
        }
    };

    if !settings.brush.is_in_range() {
        tracing::warn!(
            strength = settings.brush.strength,
            alpha = settings.brush.alpha,
            "brush settings out of range, clamping"
        );
        settings.brush = settings.brush.clamped();
    }

    Some(settings)
}

/// Load settings, falling back to defaults.
pub fn load_or_default(app_config_dir: &Path) -> PaintSettings {
    load_settings(app_config_dir).unwrap_or_default()
}

/// Save settings to the config directory.
pub fn save_settings(app_config_dir: &Path, settings: &PaintSettings) -> Result<(), PaintError> {
    std::fs::create_dir_all(app_config_dir)?;
    write_json(&crate::paths::settings_path(app_config_dir), settings)
}

/// JSON Schema of the settings file.
pub fn settings_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(PaintSettings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::model::{BlendMode, Color};

    #[test]
    fn test_settings_round_trip() {
        let dir = std::env::temp_dir().join("vertex_face_paint_test_settings");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let settings = PaintSettings {
            brush: Brush::new(Color::rgb(1.0, 0.5, 0.0))
                .with_strength(0.25)
                .with_blend_mode(BlendMode::Overlay),
            ..PaintSettings::default()
        };
        save_settings(&dir, &settings).unwrap();

        let loaded = load_settings(&dir).expect("should load");
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_blend_mode_keeps_rest_of_brush() {
        let dir = std::env::temp_dir().join("vertex_face_paint_test_unknown_mode");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let json = serde_json::json!({
            "version": 1,
            "brush": {
                "color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 },
                "strength": 0.3,
                "blend_mode": "SCREEN",
                "alpha": 0.5
            }
        });
        std::fs::write(crate::paths::settings_path(&dir), json.to_string()).unwrap();

        let loaded = load_or_default(&dir);
        assert_eq!(loaded.brush.color, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(loaded.brush.strength, 0.3);
        assert_eq!(loaded.brush.alpha, 0.5);
        assert_eq!(loaded.brush.blend_mode, BlendMode::Mix);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_out_of_range_brush_is_clamped() {
        let dir = std::env::temp_dir().join("vertex_face_paint_test_clamp");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let json = serde_json::json!({
            "version": 1,
            "brush": {
                "color": { "r": 0.0, "g": 0.0, "b": 1.0, "a": 1.0 },
                "strength": 4.0,
                "alpha": -1.0
            }
        });
        std::fs::write(crate::paths::settings_path(&dir), json.to_string()).unwrap();
        let loaded = load_settings(&dir).expect("should load");
        assert_eq!(loaded.brush.strength, 1.0);
        assert_eq!(loaded.brush.alpha, 0.0);
        assert_eq!(loaded.brush.color, Color::rgb(0.0, 0.0, 1.0));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_nan_strength_does_not_lose_saved_brush() {
        let dir = std::env::temp_dir().join("vertex_face_paint_test_nan");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let settings = PaintSettings {
            brush: Brush::new(Color::rgb(1.0, 0.0, 0.0))
                .with_strength(f32::NAN)
                .clamped(),
            ..PaintSettings::default()
        };
        save_settings(&dir, &settings).unwrap();

        let loaded = load_settings(&dir).expect("should reload");
        assert_eq!(loaded.brush.strength, 1.0);
        assert_eq!(loaded.brush.color, Color::rgb(1.0, 0.0, 0.0));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = std::env::temp_dir().join("vertex_face_paint_test_no_settings");
        let _ = std::fs::remove_dir_all(&dir);
        assert!(load_settings(&dir).is_none());
        assert_eq!(load_or_default(&dir), PaintSettings::default());
    }

    #[test]
    fn test_schema_describes_brush() {
        let schema = serde_json::to_value(settings_schema()).unwrap();
        assert!(schema["properties"]["brush"].is_object());
        assert!(schema["definitions"]["BlendMode"].is_object());
    }
}
