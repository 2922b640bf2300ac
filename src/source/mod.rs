mod file_source;

pub use file_source::FileSource;

use crate::error::JobError;
use image::RgbaImage;
use std::path::Path;

/// Trait for image sources
pub trait ImageSource {
    /// Load an image, normalized to 8-bit RGBA
    fn load(&mut self, path: &Path) -> Result<RgbaImage, JobError>;
}
