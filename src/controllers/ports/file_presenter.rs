use std::path::Path;

use crate::core::data::frame::Frame;

pub trait FilePresenterPort {
    fn present(&self, frame: &Frame, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
