use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::gridlines::Gridlines;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

/// Everything one completed render hands to the presentation layer.
#[derive(Debug)]
pub struct Frame {
    pub viewport: Viewport,
    pub canvas_size: CanvasSize,
    pub iteration_cap: u32,
    pub pixel_buffer: PixelBuffer,
    pub gridlines: Gridlines,
}
