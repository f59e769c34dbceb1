//! Cube-face geometry for the quadrilateralized sphere: face bases, the
//! flattened six-cell layout, the tangent-angle projection whose grid
//! lines are great circles, and arc/distance primitives.

mod arc;
mod coverage;
mod error;
mod face;
mod face_coord;
mod layout;
mod projection;

pub use arc::{SPHERE_RADIUS, arc_length, distance_to_segment, distance_to_segment_dc};
pub use coverage::face_extents;
pub use error::CubeError;
pub use face::Face;
pub use face_coord::FaceCoord;
pub use layout::{cube_to_face, cube_to_face_extent, face_to_cube};
pub use projection::{
    direction_to_face, direction_to_face_coords, face_coords_to_lat_lon, face_to_direction,
    lat_lon_to_face_coords,
};
