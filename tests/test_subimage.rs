mod common;

use card_index::detection::subimage::extract_glyph;
use common::*;
use image::{Rgb, RgbImage};
use imageproc::point::Point;

const FILL: Rgb<u8> = Rgb([200, 100, 50]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

fn solid_region() -> RgbImage {
    RgbImage::from_pixel(60, 60, FILL)
}

#[test]
fn test_pixels_outside_polygon_are_black() {
    let triangle = Contour::new(vec![Point::new(10, 10), Point::new(30, 10), Point::new(10, 40)])
        .expect("non-empty polygon");
    let glyph = extract_glyph(&solid_region(), &triangle);

    assert_eq!(glyph.dimensions(), (21, 31));
    assert_eq!(*glyph.get_pixel(2, 2), FILL);
    assert_eq!(*glyph.get_pixel(20, 30), BLACK);
}

#[test]
fn test_degenerate_polygon_keeps_whole_box() {
    let segment = Contour::new(vec![Point::new(5, 5), Point::new(15, 25)]).expect("non-empty polygon");
    let glyph = extract_glyph(&solid_region(), &segment);

    assert_eq!(glyph.dimensions(), (11, 21));
    assert!(glyph.pixels().all(|p| *p == FILL));
}
