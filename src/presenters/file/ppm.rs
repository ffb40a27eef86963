use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame::Frame;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::presenters::file::gridline_overlay::{blend_pixel, gridline_mask};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes frames as binary (P6) PPM. Alpha is dropped; the renderer always
/// produces opaque pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {
    gridlines: bool,
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &Frame, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(fs::File::create(filepath)?);
        self.write(frame, &mut file)?;
        file.flush()?;

        debug!(path = %filepath.display(), gridlines = self.gridlines, "wrote ppm");

        Ok(())
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_gridlines(gridlines: bool) -> Self {
        Self { gridlines }
    }

    pub fn write(&self, frame: &Frame, out: &mut impl Write) -> std::io::Result<()> {
        let width = frame.canvas_size.width();
        let height = frame.canvas_size.height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        write!(out, "P6\n{width} {height}\n255\n")?;

        let mask = self
            .gridlines
            .then(|| gridline_mask(frame.canvas_size, &frame.gridlines));
        let stroke = frame.gridlines.stroke();

        for (index, rgba) in frame
            .pixel_buffer
            .data()
            .chunks_exact(BYTES_PER_PIXEL)
            .enumerate()
        {
            let mut rgb = [rgba[0], rgba[1], rgba[2]];

            if mask.as_ref().is_some_and(|mask| mask[index]) {
                blend_pixel(&mut rgb, stroke);
            }

            out.write_all(&rgb)?;
        }

        Ok(())
    }
}
