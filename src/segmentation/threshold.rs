use super::types::BackgroundClassifier;
use image::Rgba;

pub const DEFAULT_THRESHOLD: i32 = 240;

/// Classifies light pixels as background.
///
/// A pixel is background only when red, green and blue are all strictly
/// above the threshold. Alpha is ignored. The threshold is not clamped:
/// anything below zero matches every pixel, 255 and above match none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuminanceThreshold {
    threshold: i32,
}

impl LuminanceThreshold {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }
}

impl Default for LuminanceThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl BackgroundClassifier for LuminanceThreshold {
    fn is_background(&self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, _] = pixel.0;
        [r, g, b]
            .into_iter()
            .all(|channel| i32::from(channel) > self.threshold)
    }
}
