use image::imageops::grayscale;
use image::{GrayImage, RgbImage};
use imageproc::contrast::otsu_level;
use imageproc::edges::canny;
use imageproc::filter::box_filter;

/// Convert image to grayscale
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    grayscale(img)
}

/// Box blur to suppress sensor noise
pub fn apply_blur(img: &GrayImage, radius: u32) -> GrayImage {
    box_filter(img, radius, radius)
}

/// Canny thresholds derived from the image instead of fixed values.
///
/// The Otsu level of the image is the high threshold and half of it the
/// low one, so lighting changes between photos shift both together.
pub fn auto_thresholds(img: &GrayImage) -> (f32, f32) {
    let high = otsu_level(img).max(1) as f32;
    (high / 2.0, high)
}

/// Detect edges using Canny edge detector
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold, high_threshold)
}
