use crate::{
    foundation::core::Canvas,
    foundation::error::{TilefadeError, TilefadeResult},
};

/// Linear crossfade of one channel: `round(a * (1 - alpha) + b * alpha)` clamped to `0..=255`.
///
/// `alpha == 0` returns `a` and `alpha == 1` returns `b` exactly. Values outside `[0, 1]`
/// extrapolate before the clamp.
pub fn mix_channel(a: u8, b: u8, alpha: f64) -> u8 {
    let v = f64::from(a) * (1.0 - alpha) + f64::from(b) * alpha;
    v.round().clamp(0.0, 255.0) as u8
}

/// Blend two equally sized canvases. `alpha = 0` selects `a`, `alpha = 1` selects `b`.
pub fn blend(a: &Canvas, b: &Canvas, alpha: f64) -> TilefadeResult<Canvas> {
    ensure_same_dimensions(a, b)?;
    if !alpha.is_finite() {
        return Err(TilefadeError::validation("blend alpha must be finite"));
    }
    Ok(blend_unchecked(a, b, alpha))
}

pub fn ensure_same_dimensions(a: &Canvas, b: &Canvas) -> TilefadeResult<()> {
    if a.dimensions() != b.dimensions() {
        return Err(TilefadeError::dimension_mismatch(a.dimensions(), b.dimensions()));
    }
    Ok(())
}

// Callers guarantee equal dimensions and a finite alpha.
pub(crate) fn blend_unchecked(a: &Canvas, b: &Canvas, alpha: f64) -> Canvas {
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&av, &bv)| mix_channel(av, bv, alpha))
        .collect();
    Canvas::from_parts(a.width(), a.height(), data)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blend.rs"]
mod tests;
