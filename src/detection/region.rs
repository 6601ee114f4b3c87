use image::{DynamicImage, RgbImage};

/// Crop the top-left corner of a rectified card, where the index sits.
///
/// Too-small inputs give an empty or near-empty region; that is left for
/// the contour stage to report as "nothing found".
pub fn select_region(card: &DynamicImage, width_divisor: f64, height_divisor: f64) -> RgbImage {
    let width = (card.width() as f64 / width_divisor) as u32;
    let height = (card.height() as f64 / height_divisor) as u32;
    card.crop_imm(0, 0, width, height).to_rgb8()
}
