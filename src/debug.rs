//! Debug overlay and result display.
//!
//! Nothing in here feeds back into detection: the overlay colors and the
//! display side effects never touch the returned glyph images.

use anyhow::Result;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;

use crate::models::{BoundingBox, CardIndex, Contour};

/// Seed used when no explicit one is given.
pub const DEFAULT_COLOR_SEED: u64 = 12345;

/// Source of per-contour overlay colors.
pub trait ColorSource: Send {
    fn next_color(&mut self) -> Rgb<u8>;

    /// Restart the color sequence.
    fn reseed(&mut self);
}

/// Reproducible pseudo-random colors.
pub struct SeededColors {
    seed: u64,
    rng: StdRng,
}

impl SeededColors {
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for SeededColors {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR_SEED)
    }
}

impl ColorSource for SeededColors {
    fn next_color(&mut self) -> Rgb<u8> {
        Rgb([
            self.rng.gen_range(0..=u8::MAX),
            self.rng.gen_range(0..=u8::MAX),
            self.rng.gen_range(0..=u8::MAX),
        ])
    }

    fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

/// The four labeled views shown for a successful extraction.
#[derive(Debug, Clone)]
pub struct DebugView {
    pub region: RgbImage,
    pub overlay: RgbImage,
    pub rank: RgbImage,
    pub suit: RgbImage,
}

impl DebugView {
    pub fn new(
        region: &RgbImage,
        contours: &[Contour],
        index: &CardIndex,
        colors: &mut dyn ColorSource,
    ) -> Self {
        Self {
            region: region.clone(),
            overlay: draw_overlay(region.width(), region.height(), contours, index, colors),
            rank: index.rank.image.clone(),
            suit: index.suit.image.clone(),
        }
    }

    /// (label, image) pairs in display order.
    pub fn views(&self) -> [(&'static str, &RgbImage); 4] {
        [
            ("source", &self.region),
            ("contours", &self.overlay),
            ("rank", &self.rank),
            ("suit", &self.suit),
        ]
    }
}

/// Black canvas with every contour outlined in its own color. The chosen
/// rank and suit boxes get a thicker frame.
pub fn draw_overlay(
    width: u32,
    height: u32,
    contours: &[Contour],
    index: &CardIndex,
    colors: &mut dyn ColorSource,
) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);

    for contour in contours {
        let color = colors.next_color();
        draw_closed_polyline(&mut canvas, contour, color);
        draw_box(&mut canvas, &contour.bounds, color, 1);
    }
    for glyph in [&index.rank, &index.suit] {
        let color = colors.next_color();
        draw_box(&mut canvas, &glyph.bounds, color, 2);
    }

    canvas
}

fn draw_closed_polyline(canvas: &mut RgbImage, contour: &Contour, color: Rgb<u8>) {
    let points = &contour.polygon;
    if points.is_empty() {
        return;
    }
    for (i, start) in points.iter().enumerate() {
        let end = &points[(i + 1) % points.len()];
        draw_line_segment_mut(
            canvas,
            (start.x as f32, start.y as f32),
            (end.x as f32, end.y as f32),
            color,
        );
    }
}

fn draw_box(canvas: &mut RgbImage, bounds: &BoundingBox, color: Rgb<u8>, thickness: u32) {
    for inset in 0..thickness {
        if bounds.width <= 2 * inset || bounds.height <= 2 * inset {
            break;
        }
        let rect = Rect::at((bounds.x + inset) as i32, (bounds.y + inset) as i32)
            .of_size(bounds.width - 2 * inset, bounds.height - 2 * inset);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}

/// Somewhere to show a successful extraction.
pub trait ResultDisplay: Send {
    fn show(&self, view: &DebugView) -> Result<()>;
}

/// Writes each view as `<label>.png` into a directory, then optionally
/// blocks until Enter is pressed.
#[derive(Clone, Debug)]
pub struct DirectoryDisplay {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
    /// Wait for a key press after writing
    pub wait_for_key: bool,
}

impl DirectoryDisplay {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), wait_for_key: false }
    }

    pub fn with_wait(mut self, wait_for_key: bool) -> Self {
        self.wait_for_key = wait_for_key;
        self
    }
}

impl Default for DirectoryDisplay {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("card-index")).with_wait(true)
    }
}

impl ResultDisplay for DirectoryDisplay {
    fn show(&self, view: &DebugView) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;

        for (label, image) in view.views() {
            let path = self.output_dir.join(format!("{}.png", label));
            image
                .save(&path)
                .map_err(|e| anyhow::anyhow!("Failed to save debug image {}: {}", path.display(), e))?;
        }
        info!("Debug views written to {}", self.output_dir.display());

        if self.wait_for_key {
            println!("Press Enter to continue...");
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
        }
        Ok(())
    }
}
