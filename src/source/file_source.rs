use super::ImageSource;
use crate::error::JobError;
use image::{ImageError, ImageReader, RgbaImage};
use std::path::Path;

/// Reads images from the local filesystem.
///
/// The format is sniffed from the file contents, so a PNG saved with a
/// wrong extension still decodes.
#[derive(Debug, Default)]
pub struct FileSource;

impl FileSource {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSource for FileSource {
    fn load(&mut self, path: &Path) -> Result<RgbaImage, JobError> {
        if !path.exists() {
            return Err(JobError::NotFound(path.to_path_buf()));
        }

        let decode_err = |source: ImageError| JobError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_err(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;

        tracing::debug!(
            "Loaded {} ({}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );

        // Sources without alpha come back fully opaque
        Ok(image.into_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");

        let err = FileSource::new().load(&path).unwrap_err();
        assert!(matches!(err, JobError::NotFound(p) if p == path));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = FileSource::new().load(&path).unwrap_err();
        assert!(matches!(err, JobError::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn rgb_source_gets_opaque_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        let rgb = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 10, y as u8 * 20, 7]));
        rgb.save(&path).unwrap();

        let loaded = FileSource::new().load(&path).unwrap();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(*loaded.get_pixel(2, 1), Rgba([20, 20, 7, 255]));
        assert!(loaded.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn format_is_sniffed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("logo.png");
        let disguised = dir.path().join("logo.dat");
        RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4])).save(&png).unwrap();
        std::fs::rename(&png, &disguised).unwrap();

        let loaded = FileSource::new().load(&disguised).unwrap();
        assert_eq!(*loaded.get_pixel(0, 0), Rgba([1, 2, 3, 4]));
    }
}
