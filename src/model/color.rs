use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::BlendMode;

/// RGBA color with floating-point channels, conventionally in [0, 1].
///
/// Channels are not clamped on construction. Blending clamps its RGB output;
/// alpha is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_array([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same RGB, alpha replaced wholesale.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Clamp every channel, alpha included, into [0, 1].
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Apply `f(self_channel, other_channel)` to R, G and B. Alpha comes from `self`.
    #[inline]
    pub fn zip_rgb(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
            a: self.a,
        }
    }

    /// Paint `brush` onto `self` (the stored color). See [`crate::engine::mixer::blend`].
    #[inline]
    pub fn blend(self, brush: Self, strength: f32, mode: BlendMode) -> Self {
        crate::engine::mixer::blend(self, brush, strength, mode)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for Color {
    fn from(value: [f32; 4]) -> Self {
        Self::from_array(value)
    }
}

impl From<Color> for [f32; 4] {
    fn from(value: Color) -> Self {
        value.to_array()
    }
}

/// Error returned when a channel list can't be parsed into a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl std::fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid color '{}': expected 3 or 4 comma-separated numbers", self.0)
    }
}

impl std::error::Error for ParseColorError {}

/// Parses `"r,g,b"` (alpha = 1) or `"r,g,b,a"`.
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseColorError(s.to_string()))?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}
