//! Geometric search for the rank and suit contours.
//!
//! Card indices put the suit pip directly under the rank glyph, both near
//! the top-left corner. The filters below encode that layout and nothing
//! else: no shape matching happens here.

use tracing::debug;

use crate::config::ExtractorConfig;
use crate::error::ExtractFailure;
use crate::models::{BoundingBox, Contour};

/// Indices into the contour list of the chosen rank and suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub rank: usize,
    pub suit: usize,
}

/// Region dimensions the filters are relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSize {
    pub width: u32,
    pub height: u32,
}

impl RegionSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }
}

fn has_glyph_shape(bounds: &BoundingBox, min_area: u32, config: &ExtractorConfig) -> bool {
    let ratio = bounds.aspect_ratio();
    bounds.area() >= min_area
        && ratio >= config.min_aspect_ratio
        && ratio <= config.max_aspect_ratio
}

/// Rank filter: large, upright, and inside the upper-left three quarters.
pub fn is_rank(bounds: &BoundingBox, region: RegionSize, config: &ExtractorConfig) -> bool {
    has_glyph_shape(bounds, region.area() / config.rank_area_divisor, config)
        && bounds.right() <= 3 * region.width / 4
        && bounds.bottom() <= 3 * region.height / 4
}

/// Suit filter: smaller minimum area, below the rank and not far right of it.
pub fn is_suit(
    bounds: &BoundingBox,
    rank: &BoundingBox,
    region: RegionSize,
    config: &ExtractorConfig,
) -> bool {
    has_glyph_shape(bounds, region.area() / config.suit_area_divisor, config)
        && bounds.bottom() > rank.bottom() + config.error_margin
        && bounds.right() < rank.right() + region.width / config.suit_offset_divisor
}

/// First contour passing the rank filter.
pub fn find_rank(contours: &[Contour], region: RegionSize, config: &ExtractorConfig) -> Option<usize> {
    contours.iter().position(|c| is_rank(&c.bounds, region, config))
}

/// First contour passing the suit filter relative to `rank`.
pub fn find_suit(
    contours: &[Contour],
    rank: &BoundingBox,
    region: RegionSize,
    config: &ExtractorConfig,
) -> Option<usize> {
    contours.iter().position(|c| is_suit(&c.bounds, rank, region, config))
}

/// Search the rank first, then the suit below it. One pass each, first match wins.
pub fn locate(
    contours: &[Contour],
    region: RegionSize,
    config: &ExtractorConfig,
) -> Result<Located, ExtractFailure> {
    let rank = find_rank(contours, region, config).ok_or(ExtractFailure::RankNotFound)?;
    let rank_bounds = contours[rank].bounds;
    debug!(
        "Rank candidate #{} at {:?}, bottom-right ({}, {})",
        rank,
        rank_bounds,
        rank_bounds.right(),
        rank_bounds.bottom()
    );

    let suit = find_suit(contours, &rank_bounds, region, config)
        .ok_or(ExtractFailure::SuitNotFound { rank: rank_bounds })?;
    debug!("Suit candidate #{} at {:?}", suit, contours[suit].bounds);

    Ok(Located { rank, suit })
}
