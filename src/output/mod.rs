mod png_file;

pub use png_file::PngFileSink;

use crate::error::JobError;
use image::RgbaImage;
use std::path::Path;

/// Trait for output destinations
pub trait OutputSink {
    /// Persist an image at the given path
    fn write(&mut self, image: &RgbaImage, path: &Path) -> Result<(), JobError>;
}
