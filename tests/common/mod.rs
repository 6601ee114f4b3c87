mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from card_index for tests
#[allow(unused_imports)]
pub use card_index::{
    BoundingBox, CardIndex, Contour, DirectoryDisplay, ExtractFailure, Extraction, Extractor,
    ExtractorConfig, SeededColors,
};
