use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::util::serde_variant_name;

/// How the brush color combines with the color already stored on a corner.
///
/// Serialized as the host's identifier (`"MIX"`, `"OVERLAY"`). Deserializing
/// goes through [`BlendMode::from_identifier`], so unknown identifiers load as Mix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum BlendMode {
    /// Linear interpolation from the stored color toward the brush color.
    #[default]
    Mix,
    /// Brush overlaid on the stored color: darkens below 0.5, lightens above.
    Overlay,
}

impl BlendMode {
    /// All blend modes in dropdown order.
    pub const ALL: [BlendMode; 2] = [BlendMode::Mix, BlendMode::Overlay];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Mix => "Mix",
            Self::Overlay => "Overlay",
        }
    }

    /// Identifier used by the host's brush settings.
    pub fn identifier(self) -> String {
        serde_variant_name(&self).unwrap_or_else(|| self.display_name().to_uppercase())
    }

    /// Resolve a host identifier. Unknown identifiers fall back to [`BlendMode::Mix`].
    pub fn from_identifier(id: &str) -> Self {
        let trimmed = id.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.identifier() == trimmed)
            .unwrap_or_else(|| {
                tracing::warn!(identifier = id, "unknown blend mode, falling back to Mix");
                Self::Mix
            })
    }
}

impl<'de> Deserialize<'de> for BlendMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self::from_identifier(&id))
    }
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
