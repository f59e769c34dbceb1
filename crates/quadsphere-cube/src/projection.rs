//! Forward and inverse tangent-angle projection between geographic
//! coordinates, direction cosines, and face coordinates.
//!
//! The face parameterization is the gnomonic (tangent-angle) map
//! `dir = normalize(n + tan(x·π/4)·t + tan(y·π/4)·b)`. Holding `x` (or
//! `y`) fixed keeps the direction inside one plane through the sphere
//! center, so every grid line is a great-circle arc and adjacent faces
//! meet edge-to-edge with no angular crease. The inverse is closed
//! form, which keeps round-trips exact to floating-point precision.

use std::f64::consts::FRAC_PI_4;

use glam::DVec3;

use quadsphere_geo::Geographic;

use crate::{CubeError, Face, FaceCoord};

/// Slack accepted when a face hint places a point on a shared edge;
/// wide enough to absorb ellipsoidal round-trip noise at face corners,
/// still a few meters on the ground.
const EDGE_EPSILON: f64 = 1e-6;

/// Convert a face coordinate to its direction cosine (unit vector).
///
/// This is the canonical bridge between face-local coordinates and 3D
/// sphere geometry.
#[must_use]
pub fn face_to_direction(fc: &FaceCoord) -> DVec3 {
    let wx = (fc.x * FRAC_PI_4).tan();
    let wy = (fc.y * FRAC_PI_4).tan();
    (fc.face.normal() + wx * fc.face.tangent() + wy * fc.face.bitangent()).normalize()
}

/// The face whose center is angularly nearest the direction.
///
/// Exact boundary ties (shared edges and corners) resolve to the lowest
/// face index. A zero vector maps to [`Face::Equator0`].
#[must_use]
pub fn direction_to_face(dir: DVec3) -> Face {
    let mut best = Face::Equator0;
    let mut best_dot = dir.dot(best.normal());
    for face in &Face::ALL[1..] {
        let d = dir.dot(face.normal());
        if d > best_dot {
            best = *face;
            best_dot = d;
        }
    }
    best
}

/// Convert a direction cosine to face coordinates.
///
/// Without a hint the containing face is chosen by
/// [`direction_to_face`]; a hint forces the named face and fails with
/// [`CubeError::FaceMismatch`] when the direction cannot lie on it. The
/// input does not need to be unit length.
pub fn direction_to_face_coords(dir: DVec3, hint: Option<Face>) -> Result<FaceCoord, CubeError> {
    if !dir.is_finite() {
        return Err(CubeError::NonFinite);
    }
    let face = match hint {
        Some(face) => face,
        None => direction_to_face(dir),
    };

    let depth = dir.dot(face.normal());
    if depth <= 0.0 {
        return Err(CubeError::FaceMismatch(face));
    }

    let x = (dir.dot(face.tangent()) / depth).atan() / FRAC_PI_4;
    let y = (dir.dot(face.bitangent()) / depth).atan() / FRAC_PI_4;
    if x.abs() > 1.0 + EDGE_EPSILON || y.abs() > 1.0 + EDGE_EPSILON {
        return Err(CubeError::FaceMismatch(face));
    }

    Ok(FaceCoord::new(face, x, y))
}

/// Convert geographic degrees to face coordinates.
///
/// Face selection follows [`direction_to_face_coords`]: nearest face
/// center, lowest index on exact boundaries, or the supplied hint.
/// Fails on non-finite input, latitude outside \[−90, 90\], or a hint
/// naming a face that cannot contain the point.
pub fn lat_lon_to_face_coords(
    lat: f64,
    lon: f64,
    hint: Option<Face>,
) -> Result<FaceCoord, CubeError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(CubeError::NonFinite);
    }
    if lat.abs() > 90.0 {
        return Err(CubeError::OutOfRange(lat, lon));
    }
    direction_to_face_coords(Geographic::new(lat, lon).to_unit_vector(), hint)
}

/// Convert face coordinates back to geographic degrees.
///
/// Exact inverse of [`lat_lon_to_face_coords`] for interior points;
/// boundary points reproduce whichever face their hint selected. Fails
/// only on non-finite or out-of-range input.
pub fn face_coords_to_lat_lon(x: f64, y: f64, face: Face) -> Result<Geographic, CubeError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(CubeError::NonFinite);
    }
    if x.abs() > 1.0 || y.abs() > 1.0 {
        return Err(CubeError::OutOfRange(x, y));
    }
    Ok(Geographic::from_unit_vector(face_to_direction(
        &FaceCoord::new_unchecked(face, x, y),
    )))
}
