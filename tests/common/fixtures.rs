#![allow(dead_code)]

use card_index::{BoundingBox, Contour};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Card size whose default corner region is exactly 200x280.
pub const CARD_WIDTH: u32 = 800;
pub const CARD_HEIGHT: u32 = 980;
pub const REGION_WIDTH: u32 = 200;
pub const REGION_HEIGHT: u32 = 280;

/// Rank glyph stand-in, in region coordinates: (x, y, width, height).
pub const RANK_RECT: (u32, u32, u32, u32) = (20, 20, 60, 120);
/// Suit glyph stand-in, directly below the rank.
pub const SUIT_RECT: (u32, u32, u32, u32) = (20, 160, 42, 65);

const PAPER: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([20, 20, 20]);

/// Plain white card.
pub fn blank_card(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, PAPER)
}

/// Paint a solid dark rectangle.
pub fn draw_glyph(img: &mut RgbImage, (x, y, width, height): (u32, u32, u32, u32)) {
    draw_filled_rect_mut(img, Rect::at(x as i32, y as i32).of_size(width, height), INK);
}

/// Card with the given glyph rectangles painted into its corner.
pub fn card_with(glyphs: &[(u32, u32, u32, u32)]) -> DynamicImage {
    let mut card = blank_card(CARD_WIDTH, CARD_HEIGHT);
    for glyph in glyphs {
        draw_glyph(&mut card, *glyph);
    }
    DynamicImage::ImageRgb8(card)
}

/// Card with a rank and a suit in the usual stacked layout.
pub fn standard_card() -> DynamicImage {
    card_with(&[RANK_RECT, SUIT_RECT])
}

/// Rectangular contour with the given box.
pub fn rect_contour(x: u32, y: u32, width: u32, height: u32) -> Contour {
    Contour::from_bounds(BoundingBox::new(x, y, width, height))
}

/// True when every side of `bounds` is within `tolerance` pixels of `rect`.
pub fn roughly_matches(bounds: &BoundingBox, (x, y, width, height): (u32, u32, u32, u32), tolerance: u32) -> bool {
    bounds.x.abs_diff(x) <= tolerance
        && bounds.y.abs_diff(y) <= tolerance
        && bounds.right().abs_diff(x + width) <= tolerance
        && bounds.bottom().abs_diff(y + height) <= tolerance
}
