//! Error type for cube-face operations.

use crate::Face;

/// Errors reported by the cube-face math.
///
/// Every condition here is locally recoverable by the caller (skip the
/// point, split the extent, drop the tile); none aborts anything.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CubeError {
    /// An input coordinate was NaN or infinite.
    #[error("input coordinate is not finite")]
    NonFinite,

    /// A coordinate pair was outside its valid domain.
    #[error("coordinate ({0}, {1}) is outside the valid range")]
    OutOfRange(f64, f64),

    /// A cube-layout coordinate fell in none of the six face cells.
    #[error("cube coordinate ({0}, {1}) lies outside the face layout")]
    OutOfLayout(f64, f64),

    /// A point cannot lie on the requested face.
    #[error("point does not lie on face {0:?}")]
    FaceMismatch(Face),

    /// An extent overlaps more than one face cell; the caller must split
    /// it before resolving a face.
    #[error("extent spans more than one cube face")]
    CrossFaceExtent,
}
