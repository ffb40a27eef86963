use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::gridlines::{Gridlines, Stroke};

/// Marks every pixel a 1px stroke of the gridlines covers. A segment at
/// canvas coordinate `k` covers pixel row (or column) `floor(k)`.
#[must_use]
pub fn gridline_mask(canvas_size: CanvasSize, gridlines: &Gridlines) -> Vec<bool> {
    let width = canvas_size.width() as usize;
    let height = canvas_size.height() as usize;
    let mut mask = vec![false; width * height];

    for segment in gridlines.horizontal() {
        let y = segment.start.y.floor();
        if y < 0.0 || y >= height as f64 {
            continue;
        }
        let row = y as usize * width;
        let (x0, x1) = span(segment.start.x, segment.end.x, width);
        mask[row + x0..row + x1].fill(true);
    }

    for segment in gridlines.vertical() {
        let x = segment.start.x.floor();
        if x < 0.0 || x >= width as f64 {
            continue;
        }
        let (y0, y1) = span(segment.start.y, segment.end.y, height);
        for y in y0..y1 {
            mask[y * width + x as usize] = true;
        }
    }

    mask
}

// pixel range [from, to) covered between two coordinates, clipped to [0, limit)
fn span(a: f64, b: f64, limit: usize) -> (usize, usize) {
    let lo = a.min(b).floor().clamp(0.0, limit as f64) as usize;
    let hi = a.max(b).ceil().clamp(0.0, limit as f64) as usize;

    (lo, hi)
}

/// Blends the stroke colour over one channel value.
#[must_use]
pub fn blend_channel(src: u8, stroke_channel: u8, opacity: f64) -> u8 {
    let out = f64::from(src) * (1.0 - opacity) + f64::from(stroke_channel) * opacity;

    out.round().clamp(0.0, 255.0) as u8
}

/// Composites the stroke over an RGB triple in place.
pub fn blend_pixel(rgb: &mut [u8; 3], stroke: Stroke) {
    let colour = [stroke.colour.r, stroke.colour.g, stroke.colour.b];

    for (channel, stroke_channel) in rgb.iter_mut().zip(colour) {
        *channel = blend_channel(*channel, stroke_channel, stroke.opacity);
    }
}
