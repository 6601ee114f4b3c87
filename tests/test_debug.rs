mod common;

use card_index::Glyph;
use card_index::debug::draw_overlay;
use common::*;
use image::RgbImage;

#[test]
fn test_overlay_tolerates_empty_polygon() {
    let bounds = BoundingBox::new(2, 2, 4, 6);
    let glyph = Glyph { image: RgbImage::new(4, 6), bounds };
    let index = CardIndex { rank: glyph.clone(), suit: glyph };
    let empty = Contour { polygon: Vec::new(), bounds };

    let overlay = draw_overlay(20, 20, &[empty], &index, &mut SeededColors::default());
    assert_eq!(overlay.dimensions(), (20, 20));
}
