use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotColourMapError;

const MAX_CHANNEL: f64 = 255.0;
const GREEN_GAIN: f64 = 1.5;
const BLUE_GAIN: f64 = 2.0;

// floor, then saturate instead of wrapping
fn channel(value: f64) -> u8 {
    value.floor().clamp(0.0, MAX_CHANNEL) as u8
}

/// Linear ramp from black: red rises with the escape count, green and blue
/// rise faster and saturate at 255. Points that never escaped are black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotLinearGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotLinearGradient {
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let scale = MAX_CHANNEL / f64::from(self.max_iterations);
        let base = f64::from(iterations) * scale;

        Ok(Colour::opaque(
            channel(base),
            channel(base * GREEN_GAIN),
            channel(base * BLUE_GAIN),
        ))
    }
}

impl MandelbrotLinearGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
