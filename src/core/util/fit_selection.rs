use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Turns two plane-space corners of a drag selection into a viewport with
/// the given width/height ratio.
///
/// The selection is normalized first, then its shorter side (relative to the
/// target ratio) grows away from the minimum corner until the ratio matches.
/// Growing instead of shrinking keeps the whole selection inside the result.
///
/// Fails with [`ViewportError::InvalidSpan`] when the selection has no area
/// on either axis, which is the case for a click or a perfectly straight drag.
pub fn fit_selection_to_aspect(
    start: Complex,
    end: Complex,
    aspect_ratio: f64,
) -> Result<Viewport, ViewportError> {
    let lo_x = start.real.min(end.real);
    let lo_y = start.imag.min(end.imag);
    let hi_x = start.real.max(end.real);
    let hi_y = start.imag.max(end.imag);

    let dx = hi_x - lo_x;
    let dy = hi_y - lo_y;

    if !(dx > 0.0 && dy > 0.0) {
        return Err(ViewportError::InvalidSpan {
            width: dx,
            height: dy,
        });
    }

    let mut fit_x = hi_x;
    let mut fit_y = hi_y;

    if dx / dy > aspect_ratio {
        fit_y = lo_y + dx / aspect_ratio;
    } else {
        fit_x = lo_x + dy * aspect_ratio;
    }

    Viewport::new(lo_x, lo_y, fit_x, fit_y)
}
