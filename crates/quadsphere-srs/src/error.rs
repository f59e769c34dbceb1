//! Error types for spatial-reference transforms and registration.

use quadsphere_cube::CubeError;

use crate::SrsKind;

/// Errors reported by spatial-reference transforms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// The underlying cube-face math rejected the coordinate.
    #[error(transparent)]
    Cube(#[from] CubeError),

    /// No optimized direct path exists for this pair of references;
    /// the caller should run the generic pre/post pipeline
    /// ([`crate::reproject`]).
    #[error("no direct transform from {from} to {to}")]
    FallbackRequired {
        /// Kind of the source reference.
        from: SrsKind,
        /// Kind of the destination reference.
        to: SrsKind,
    },

    /// An input coordinate was NaN or infinite.
    #[error("input coordinate is not finite")]
    NonFinite,

    /// An extent was invalid, or no point of it could be transformed.
    #[error("extent is invalid or produced no transformable points")]
    InvalidExtent,
}

/// Errors reported when registering a spatial reference.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// A reference with this name already exists.
    #[error("a spatial reference named '{0}' is already registered")]
    DuplicateName(String),
}
