use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::plane_mapper::PlaneMapper;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z = z² + c` from `z = 0` and returns the zero-based step on
/// which `|z|²` first reached 4. Returns `max_iterations` itself when the
/// orbit stayed bounded for every step, which callers read as "inside".
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;

        let bounded = z.magnitude_squared() < ESCAPE_RADIUS_SQUARED;
        if !bounded {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    mapper: PlaneMapper,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn compute(&self, pixel: Point) -> u32 {
        escape_time(self.mapper.pixel_to_complex(pixel), self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(mapper: PlaneMapper, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            mapper,
            max_iterations,
        })
    }

    #[must_use]
    pub fn mapper(&self) -> PlaneMapper {
        self.mapper
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
