use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::models::{BoundingBox, Contour};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Cut a contour out of the region image.
///
/// The result has the size of the contour's bounding box (clamped to the
/// region). Pixels outside the polygon are black.
pub fn extract_glyph(region: &RgbImage, contour: &Contour) -> RgbImage {
    let bounds = clamp_to(&contour.bounds, region.width(), region.height());
    let Some(bounds) = bounds else {
        return RgbImage::new(0, 0);
    };

    let mask = polygon_mask(contour, &bounds);

    RgbImage::from_fn(bounds.width, bounds.height, |x, y| {
        if mask.get_pixel(x, y)[0] > 0 {
            *region.get_pixel(bounds.x + x, bounds.y + y)
        } else {
            BACKGROUND
        }
    })
}

/// Filled polygon mask in the local coordinates of `bounds`.
fn polygon_mask(contour: &Contour, bounds: &BoundingBox) -> GrayImage {
    let mut mask = GrayImage::new(bounds.width, bounds.height);
    let local: Vec<Point<i32>> = contour
        .polygon
        .iter()
        .map(|p| Point::new(p.x - bounds.x as i32, p.y - bounds.y as i32))
        .collect();

    // draw_polygon_mut wants an open vertex list with at least one edge
    if local.len() >= 3 && local.first() != local.last() {
        draw_polygon_mut(&mut mask, &local, Luma([255u8]));
    } else {
        draw_filled_rect_mut(
            &mut mask,
            Rect::at(0, 0).of_size(bounds.width, bounds.height),
            Luma([255u8]),
        );
    }
    mask
}

fn clamp_to(bounds: &BoundingBox, width: u32, height: u32) -> Option<BoundingBox> {
    if bounds.x >= width || bounds.y >= height {
        return None;
    }
    Some(BoundingBox {
        x: bounds.x,
        y: bounds.y,
        width: bounds.width.min(width - bounds.x),
        height: bounds.height.min(height - bounds.y),
    })
}
