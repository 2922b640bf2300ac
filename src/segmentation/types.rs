use image::Rgba;

/// Pixel written in place of anything classified as background
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Trait for background classifiers
/// Decides per pixel, with no knowledge of neighbours or image position
pub trait BackgroundClassifier {
    /// Returns true if the pixel belongs to the background
    fn is_background(&self, pixel: &Rgba<u8>) -> bool;
}
