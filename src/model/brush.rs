use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{BlendMode, Color};

/// Active brush state as read from the host when a paint event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
pub struct Brush {
    /// Primary brush color. Only RGB takes part in blending.
    pub color: Color,
    /// Interpolation weight between the stored color and the blended result.
    #[serde(default = "default_unit")]
    pub strength: f32,
    #[serde(default)]
    pub blend_mode: BlendMode,
    /// Brush alpha written to corners when `apply_alpha` is set.
    #[serde(default = "default_unit")]
    pub alpha: f32,
    /// Overwrite corner alpha with `alpha * strength` before blending.
    #[serde(default)]
    pub apply_alpha: bool,
}

fn default_unit() -> f32 {
    1.0
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        default_unit()
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            strength: 1.0,
            blend_mode: BlendMode::Mix,
            alpha: 1.0,
            apply_alpha: false,
        }
    }
}

impl Brush {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    /// Enable alpha painting with the given brush alpha.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self.apply_alpha = true;
        self
    }

    /// Alpha written to each corner when `apply_alpha` is set.
    pub fn stroke_alpha(&self) -> f32 {
        self.alpha * self.strength
    }

    /// Strength and alpha clamped to the [0, 1] slider range. NaN resets to the default of 1.
    pub fn clamped(self) -> Self {
        Self {
            strength: clamp_unit(self.strength),
            alpha: clamp_unit(self.alpha),
            ..self
        }
    }

    pub fn is_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.strength) && (0.0..=1.0).contains(&self.alpha)
    }
}
