use image::RgbImage;
use imageproc::point::Point;

/// Axis-aligned box around a contour polygon.
///
/// `width` and `height` count pixels, so a single point has a 1x1 box.
/// `right()` and `bottom()` are the exclusive bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width: width.max(1), height: height.max(1) }
    }

    /// Smallest box enclosing all points. Negative coordinates are clamped to 0.
    pub fn from_points(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        let min_x = min_x.max(0) as u32;
        let min_y = min_y.max(0) as u32;
        let max_x = max_x.max(0) as u32;
        let max_y = max_y.max(0) as u32;
        Some(Self::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Height over width, truncated.
    pub fn aspect_ratio(&self) -> u32 {
        self.height / self.width.max(1)
    }
}

/// Simplified closed polygon from the edge map, with its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub polygon: Vec<Point<i32>>,
    pub bounds: BoundingBox,
}

impl Contour {
    pub fn new(polygon: Vec<Point<i32>>) -> Option<Self> {
        let bounds = BoundingBox::from_points(&polygon)?;
        Some(Self { polygon, bounds })
    }

    /// Contour whose polygon is just the corners of `bounds`.
    pub fn from_bounds(bounds: BoundingBox) -> Self {
        let (x0, y0) = (bounds.x as i32, bounds.y as i32);
        let (x1, y1) = (bounds.right() as i32 - 1, bounds.bottom() as i32 - 1);
        Self {
            polygon: vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ],
            bounds,
        }
    }
}

/// A cropped glyph and where it sat in the region image.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub image: RgbImage,
    pub bounds: BoundingBox,
}

/// Rank and suit glyphs of one card corner.
#[derive(Debug, Clone)]
pub struct CardIndex {
    pub rank: Glyph,
    pub suit: Glyph,
}
