use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {width}x{height} canvas", .pixel.x, .pixel.y)]
    PixelOutsideBounds { pixel: Point, width: u32, height: u32 },
    #[error("canvas needs {expected} bytes but buffer holds {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
    #[error("cannot allocate a pixel buffer for a {width}x{height} canvas")]
    AllocationFailed { width: u32, height: u32 },
}

pub type PixelBufferData = Vec<u8>;

fn buffer_len(canvas_size: CanvasSize) -> Option<usize> {
    usize::try_from(canvas_size.width())
        .ok()?
        .checked_mul(usize::try_from(canvas_size.height()).ok()?)?
        .checked_mul(BYTES_PER_PIXEL)
}

/// Reserves room for a whole canvas of RGBA bytes without aborting the
/// process when the allocator refuses.
pub(crate) fn try_allocate(canvas_size: CanvasSize) -> Result<PixelBufferData, PixelBufferError> {
    let allocation_failed = PixelBufferError::AllocationFailed {
        width: canvas_size.width(),
        height: canvas_size.height(),
    };
    let len = buffer_len(canvas_size).ok_or_else(|| allocation_failed.clone())?;
    let mut data = PixelBufferData::new();

    data.try_reserve_exact(len).map_err(|_| allocation_failed)?;

    Ok(data)
}

/// Row-major RGBA pixels, four bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    canvas_size: CanvasSize,
    data: PixelBufferData,
}

impl PixelBuffer {
    /// A zeroed (transparent black) buffer covering the canvas.
    pub fn try_new(canvas_size: CanvasSize) -> Result<Self, PixelBufferError> {
        let mut data = try_allocate(canvas_size)?;
        data.resize(buffer_len(canvas_size).unwrap_or_default(), 0);

        Self::from_data(canvas_size, data)
    }

    pub fn from_data(
        canvas_size: CanvasSize,
        data: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = buffer_len(canvas_size).unwrap_or(usize::MAX);

        if expected != data.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { canvas_size, data })
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.data
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.index_of(pixel).ok()?;

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
            a: self.data[index + 3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.data[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.canvas_size.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.canvas_size.width(),
                height: self.canvas_size.height(),
            });
        }

        let row = pixel.y as usize * self.canvas_size.width() as usize;

        Ok((row + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> CanvasSize {
        CanvasSize::new(width, height).unwrap()
    }

    #[test]
    fn test_try_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::try_new(canvas(10, 10)).unwrap();

        assert_eq!(buffer.canvas_size(), canvas(10, 10));
        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_try_new_reports_unrepresentable_sizes() {
        let huge = canvas(u32::MAX, u32::MAX);
        let result = PixelBuffer::try_new(huge);

        assert_eq!(
            result,
            Err(PixelBufferError::AllocationFailed {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 255, 0, 255, // (1,0) green
            0, 0, 255, 255, // (0,1) blue
            255, 255, 0, 255, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(canvas(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.data(), data.as_slice());
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some(Colour::opaque(0, 0, 255)));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let too_small = PixelBuffer::from_data(canvas(2, 2), vec![255, 0, 0, 255]);
        let too_large = PixelBuffer::from_data(canvas(2, 2), vec![0; 32]);

        assert_eq!(
            too_small.unwrap_err(),
            PixelBufferError::BoundsMismatch { expected: 16, actual: 4 }
        );
        assert_eq!(
            too_large.unwrap_err(),
            PixelBufferError::BoundsMismatch { expected: 16, actual: 32 }
        );
    }

    #[test]
    fn test_set_pixel_writes_rgba_slot() {
        let mut buffer = PixelBuffer::try_new(canvas(3, 3)).unwrap();
        let colour = Colour::opaque(10, 20, 30);

        buffer.set_pixel(Point { x: 1, y: 1 }, colour).unwrap();

        assert_eq!(&buffer.data()[16..20], &[10, 20, 30, 255]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Some(colour));
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour { r: 0, g: 0, b: 0, a: 0 }));
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut buffer = PixelBuffer::try_new(canvas(3, 3)).unwrap();

        buffer.set_pixel(Point { x: 2, y: 2 }, Colour::WHITE).unwrap();

        assert_eq!(&buffer.data()[32..36], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::try_new(canvas(3, 3)).unwrap();
        let result = buffer.set_pixel(Point { x: 3, y: 1 }, Colour::WHITE);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 1 },
                width: 3,
                height: 3
            })
        );
        assert_eq!(buffer.pixel(Point { x: 1, y: 3 }), None);
    }

    #[test]
    fn test_error_messages() {
        let err = PixelBufferError::PixelOutsideBounds {
            pixel: Point { x: 5, y: 1 },
            width: 3,
            height: 3,
        };

        assert_eq!(err.to_string(), "pixel at x:5, y:1 outside of 3x3 canvas");
    }
}
