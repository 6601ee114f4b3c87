pub mod config;
pub mod debug;
pub mod detection;
pub mod error;
pub mod models;

pub use config::ExtractorConfig;
pub use debug::{ColorSource, DebugView, DirectoryDisplay, ResultDisplay, SeededColors};
pub use detection::{Extraction, Extractor};
pub use error::ExtractFailure;
pub use models::{BoundingBox, CardIndex, Contour, Glyph};
