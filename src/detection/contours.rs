use image::GrayImage;
use imageproc::contours::find_contours as trace_borders;
use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point;
use std::cmp::Reverse;

use crate::models::Contour;

/// Trace every border in a binary edge map and simplify it to a polygon.
///
/// Outer borders and hole borders are both returned; nesting is ignored.
/// The result is ordered top-to-bottom, then left-to-right, with the larger
/// of two boxes sharing a corner first.
pub fn find_contours(edges: &GrayImage, epsilon: f64) -> Vec<Contour> {
    let mut contours: Vec<Contour> = trace_borders::<i32>(edges)
        .into_iter()
        .filter(|c| !c.points.is_empty())
        .filter_map(|c| Contour::new(simplify(&c.points, epsilon)))
        .collect();

    contours.sort_by_key(|c| (c.bounds.y, c.bounds.x, Reverse(c.bounds.area())));
    contours
}

/// Closed Douglas-Peucker approximation without a repeated closing vertex.
/// Falls back to the raw border when the approximation collapses.
fn simplify(points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut poly = approximate_polygon_dp(points, epsilon, true);
    poly.dedup();
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() < 3 {
        let mut raw = points.to_vec();
        raw.dedup();
        return raw;
    }
    poly
}
