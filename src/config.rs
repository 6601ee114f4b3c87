use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable constants of the corner search. Defaults reproduce the
/// classic layout of a poker-size card index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Region width is `card width / region_width_divisor`.
    pub region_width_divisor: f64,
    /// Region height is `card height / region_height_divisor`.
    pub region_height_divisor: f64,
    /// Box blur radius; 1 gives a 3x3 kernel.
    pub blur_radius: u32,
    /// Douglas-Peucker tolerance in pixels.
    pub polygon_epsilon: f64,
    /// Rank box area must be at least `region area / rank_area_divisor`.
    pub rank_area_divisor: u32,
    /// Suit box area must be at least `region area / suit_area_divisor`.
    pub suit_area_divisor: u32,
    /// Inclusive band for the truncated height/width ratio.
    pub min_aspect_ratio: u32,
    pub max_aspect_ratio: u32,
    /// Suit bottom must be more than this many pixels below the rank bottom.
    pub error_margin: u32,
    /// Suit right edge must be left of `rank right + region width / suit_offset_divisor`.
    pub suit_offset_divisor: u32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            region_width_divisor: 4.0,
            region_height_divisor: 3.5,
            blur_radius: 1,
            polygon_epsilon: 3.0,
            rank_area_divisor: 10,
            suit_area_divisor: 25,
            min_aspect_ratio: 1,
            max_aspect_ratio: 4,
            error_margin: 5,
            suit_offset_divisor: 6,
        }
    }
}

impl ExtractorConfig {
    /// Load a JSON config. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.region_width_divisor >= 1.0) || !(self.region_height_divisor >= 1.0) {
            anyhow::bail!(
                "Region divisors must be at least 1 (got {} x {})",
                self.region_width_divisor,
                self.region_height_divisor
            );
        }
        if !(self.polygon_epsilon > 0.0) {
            anyhow::bail!("polygon_epsilon must be positive (got {})", self.polygon_epsilon);
        }
        for (name, value) in [
            ("rank_area_divisor", self.rank_area_divisor),
            ("suit_area_divisor", self.suit_area_divisor),
            ("suit_offset_divisor", self.suit_offset_divisor),
        ] {
            if value == 0 {
                anyhow::bail!("{} must be non-zero", name);
            }
        }
        if self.min_aspect_ratio > self.max_aspect_ratio {
            anyhow::bail!(
                "Aspect ratio band is inverted: {}..={}",
                self.min_aspect_ratio,
                self.max_aspect_ratio
            );
        }
        Ok(())
    }
}
