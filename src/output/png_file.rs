use super::OutputSink;
use crate::error::JobError;
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Writes PNG files, creating missing parent directories first.
///
/// The encoder is always PNG, whatever extension the path carries.
#[derive(Debug, Default)]
pub struct PngFileSink;

impl PngFileSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for PngFileSink {
    fn write(&mut self, image: &RgbaImage, path: &Path) -> Result<(), JobError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                tracing::debug!("Creating output directory {}", parent.display());
            }
            std::fs::create_dir_all(parent).map_err(|source| JobError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| JobError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}
