//! Geodetic ground layer: geographic value types, WGS-84 ellipsoid
//! conversions, and axis-aligned extents shared by the projection and
//! tiling crates.

mod ellipsoid;
mod extent;
mod geographic;

pub use ellipsoid::{Ellipsoid, WGS84_SEMI_MAJOR, WGS84_SEMI_MINOR};
pub use extent::Extent;
pub use geographic::Geographic;
