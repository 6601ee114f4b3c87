//! Failure outcomes of the rank/suit search.

use thiserror::Error;

use crate::models::BoundingBox;

/// Why a card corner yielded no index. These are normal detector outcomes,
/// not errors in the I/O sense.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractFailure {
    /// No contour passed the rank filter. Also covers empty or tiny regions.
    #[error("did not find a rank contour")]
    RankNotFound,

    /// A rank was found but nothing below it passed the suit filter.
    #[error("found rank at {rank:?} but no suit contour below it")]
    SuitNotFound { rank: BoundingBox },
}
