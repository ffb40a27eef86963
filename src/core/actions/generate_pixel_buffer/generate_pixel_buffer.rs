use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, try_allocate};
use crate::core::data::point::Point;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError<E: Error + 'static> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("colour map error: {0}")]
    ColourMap(#[source] E),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Runs the algorithm over every pixel of the canvas in row-major order and
/// streams the mapped colours straight into an RGBA buffer.
///
/// The token is polled at the start of every row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row. A cancelled run
/// returns no buffer at all.
pub fn generate_pixel_buffer<Alg, CMap, C>(
    canvas_size: CanvasSize,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Output>,
    CMap::Failure: 'static,
    C: CancelToken + ?Sized,
{
    let mut data = try_allocate(canvas_size)?;

    for y in 0..canvas_size.height() {
        if cancel.is_cancelled() {
            return Err(Cancelled.into());
        }

        for x in 0..canvas_size.width() {
            if x > 0 && x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled.into());
            }

            let value = algorithm.compute(Point { x, y });
            let colour = colour_map
                .map(value)
                .map_err(GeneratePixelBufferError::ColourMap)?;

            data.extend_from_slice(&colour.to_rgba());
        }
    }

    Ok(PixelBuffer::from_data(canvas_size, data)?)
}
