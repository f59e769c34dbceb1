//! Spatial references for the quadrilateralized sphere.
//!
//! The cube projection participates in a generic reprojection pipeline
//! as one tagged spatial-reference implementation among a small closed
//! set (geographic, projected, cube). Every pair of references can be
//! bridged through a geographic intermediate; known cheap pairs take a
//! direct path instead.

mod cube;
mod error;
mod geographic;
mod registry;
mod srs;

pub use cube::CubeSrs;
pub use error::{RegistryError, TransformError};
pub use geographic::{GeographicSrs, PlateCarreeSrs};
pub use registry::SrsRegistry;
pub use srs::{SpatialReference, SrsKind, reproject};
