mod threshold;
pub mod types;

pub use threshold::{LuminanceThreshold, DEFAULT_THRESHOLD};
pub use types::{BackgroundClassifier, TRANSPARENT};

use image::RgbaImage;

/// Replace every background pixel with transparent white
///
/// Returns a new image with the same dimensions; `source` is left untouched.
/// Foreground pixels are copied exactly, including their alpha.
pub fn remove_background<C>(source: &RgbaImage, classifier: &C) -> RgbaImage
where
    C: BackgroundClassifier + ?Sized,
{
    let _span = tracing::debug_span!("remove_background").entered();

    let mut result = source.clone();
    let mut cleared = 0usize;

    for pixel in result.pixels_mut() {
        if classifier.is_background(pixel) {
            *pixel = TRANSPARENT;
            cleared += 1;
        }
    }

    tracing::debug!(
        "Cleared {} of {} pixels",
        cleared,
        source.width() as usize * source.height() as usize
    );

    result
}
