pub mod contours;
pub mod locator;
pub mod preprocessing;
pub mod region;
pub mod subimage;

use anyhow::Result;
use image::{DynamicImage, RgbImage};
use tracing::{debug, info, warn};

use crate::config::ExtractorConfig;
use crate::debug::{ColorSource, DebugView, DirectoryDisplay, ResultDisplay, SeededColors};
use crate::error::ExtractFailure;
use crate::models::{CardIndex, Contour, Glyph};
use locator::RegionSize;

/// Smallest region side the edge detector is run on.
const MIN_REGION_SIDE: u32 = 3;

/// Outcome of one extraction call.
#[derive(Debug, Clone)]
pub enum Extraction {
    Found(CardIndex),
    NotFound(ExtractFailure),
}

impl Extraction {
    pub fn is_success(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }

    pub fn card_index(&self) -> Option<&CardIndex> {
        match self {
            Extraction::Found(index) => Some(index),
            Extraction::NotFound(_) => None,
        }
    }

    pub fn into_card_index(self) -> Option<CardIndex> {
        match self {
            Extraction::Found(index) => Some(index),
            Extraction::NotFound(_) => None,
        }
    }

    pub fn failure(&self) -> Option<ExtractFailure> {
        match self {
            Extraction::Found(_) => None,
            Extraction::NotFound(failure) => Some(*failure),
        }
    }
}

/// Grayscale, blur, edge-detect and trace the contours of a region image.
///
/// Regions too small for the edge detector give no contours.
pub fn build_contours(region: &RgbImage, config: &ExtractorConfig) -> Vec<Contour> {
    if region.width() < MIN_REGION_SIDE || region.height() < MIN_REGION_SIDE {
        debug!("Region {}x{} is degenerate, skipping edge detection", region.width(), region.height());
        return Vec::new();
    }

    let gray = preprocessing::to_grayscale(region);
    let blurred = preprocessing::apply_blur(&gray, config.blur_radius);
    let (low, high) = preprocessing::auto_thresholds(&blurred);
    debug!("Canny thresholds: low={:.1}, high={:.1}", low, high);

    let edges = preprocessing::detect_edges(&blurred, low, high);
    let found = contours::find_contours(&edges, config.polygon_epsilon);
    debug!("Found {} contours", found.len());
    found
}

/// Locates and crops the rank and suit glyphs of a rectified card.
pub struct Extractor {
    config: ExtractorConfig,
    show_result: bool,
    colors: Box<dyn ColorSource>,
    display: Box<dyn ResultDisplay>,
}

impl Extractor {
    pub fn new(show_result: bool) -> Self {
        Self {
            config: ExtractorConfig::default(),
            show_result,
            colors: Box::new(SeededColors::default()),
            display: Box::new(DirectoryDisplay::default()),
        }
    }

    pub fn with_config(mut self, config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn with_colors(mut self, colors: Box<dyn ColorSource>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_display(mut self, display: Box<dyn ResultDisplay>) -> Self {
        self.display = display;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn show_result(&self) -> bool {
        self.show_result
    }

    /// Find the rank and suit in the corner of a rectified card image.
    pub fn extract(&mut self, card: &DynamicImage) -> Extraction {
        let region = region::select_region(
            card,
            self.config.region_width_divisor,
            self.config.region_height_divisor,
        );
        debug!(
            "Card {}x{} -> corner region {}x{}",
            card.width(),
            card.height(),
            region.width(),
            region.height()
        );
        self.extract_region(&region)
    }

    /// Same as [`Extractor::extract`] on an already cropped corner region.
    pub fn extract_region(&mut self, region: &RgbImage) -> Extraction {
        let contours = build_contours(region, &self.config);
        let size = RegionSize::new(region.width(), region.height());

        let located = match locator::locate(&contours, size, &self.config) {
            Ok(located) => located,
            Err(failure) => {
                info!("{}", failure);
                return Extraction::NotFound(failure);
            }
        };

        let rank = &contours[located.rank];
        let suit = &contours[located.suit];
        let index = CardIndex {
            rank: Glyph { image: subimage::extract_glyph(region, rank), bounds: rank.bounds },
            suit: Glyph { image: subimage::extract_glyph(region, suit), bounds: suit.bounds },
        };
        info!("Found rank at {:?} and suit at {:?}", rank.bounds, suit.bounds);

        if self.show_result {
            self.colors.reseed();
            let view = DebugView::new(region, &contours, &index, self.colors.as_mut());
            if let Err(e) = self.display.show(&view) {
                warn!("Failed to display result: {:#}", e);
            }
        }

        Extraction::Found(index)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(false)
    }
}
