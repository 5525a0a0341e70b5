use crate::model::{BlendMode, Color};

/// Blend the brush color onto the stored `current` color.
///
/// Works on RGB only; the result keeps `current`'s alpha. `strength` is the
/// interpolation weight from `current` toward the mode's blended color and is
/// not clamped. Only the final per-channel value is clamped to [0, 1].
pub fn blend(current: Color, brush: Color, strength: f32, mode: BlendMode) -> Color {
    match mode {
        BlendMode::Overlay => current.zip_rgb(brush, |base, layer| {
            mix_channel(base, overlay_channel(base, layer), strength)
        }),
        BlendMode::Mix => current.zip_rgb(brush, |base, layer| mix_channel(base, layer, strength)),
    }
}

/// `base*(1-t) + target*t`, clamped to [0, 1].
#[inline]
fn mix_channel(base: f32, target: f32, t: f32) -> f32 {
    (base * (1.0 - t) + target * t).clamp(0.0, 1.0)
}

/// Overlay of `layer` on `base`. Both branches equal `base` at `layer == 0.5`.
#[inline]
fn overlay_channel(base: f32, layer: f32) -> f32 {
    if layer <= 0.5 {
        2.0 * base * layer
    } else {
        1.0 - 2.0 * (1.0 - base) * (1.0 - layer)
    }
}
