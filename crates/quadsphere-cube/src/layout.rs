//! The flattened six-cell layout: cube coordinates in [0,4]×[0,3]
//! mapped to and from per-face coordinates.
//!
//! Cell assignment: face 0 occupies x∈\[0,1\], y∈\[1,2\]; faces 1–3 the
//! next three columns of the equatorial row; the north cap sits above
//! face 0 (y∈\[2,3\]) and the south cap below it (y∈\[0,1\]). The other
//! six cells of the 4×3 grid are unused.

use crate::{CubeError, Face, FaceCoord};

/// Map a cube-layout coordinate to the face containing it.
///
/// Boundary-exact input (a coordinate on a shared cell edge) is
/// ambiguous by construction; the lowest-numbered adjacent face wins,
/// realized by scanning cells in face order and taking the first closed
/// containment. Use [`cube_to_face_extent`] when a whole rectangle is
/// available to disambiguate.
pub fn cube_to_face(x: f64, y: f64) -> Result<FaceCoord, CubeError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(CubeError::NonFinite);
    }
    for face in Face::ALL {
        let (ox, oy) = face.layout_origin();
        if x >= ox && x <= ox + 1.0 && y >= oy && y <= oy + 1.0 {
            return Ok(FaceCoord::new_unchecked(
                face,
                2.0 * (x - ox) - 1.0,
                2.0 * (y - oy) - 1.0,
            ));
        }
    }
    Err(CubeError::OutOfLayout(x, y))
}

/// Resolve the single face whose cell contains the whole extent.
///
/// Unlike the point form, a rectangle straddling a cell boundary is an
/// input-contract violation and fails with
/// [`CubeError::CrossFaceExtent`]; callers split cross-face extents
/// first.
pub fn cube_to_face_extent(
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
) -> Result<Face, CubeError> {
    if !xmin.is_finite() || !ymin.is_finite() || !xmax.is_finite() || !ymax.is_finite() {
        return Err(CubeError::NonFinite);
    }
    if xmin > xmax || ymin > ymax {
        return Err(CubeError::OutOfRange(xmin, ymin));
    }
    for face in Face::ALL {
        let (ox, oy) = face.layout_origin();
        if xmin >= ox && xmax <= ox + 1.0 && ymin >= oy && ymax <= oy + 1.0 {
            return Ok(face);
        }
    }
    // Not contained anywhere: distinguish a boundary straddle from an
    // extent outside the layout entirely.
    let straddles = Face::ALL.iter().any(|face| {
        let (ox, oy) = face.layout_origin();
        xmin < ox + 1.0 && ox < xmax && ymin < oy + 1.0 && oy < ymax
    });
    if straddles {
        Err(CubeError::CrossFaceExtent)
    } else {
        Err(CubeError::OutOfLayout(xmin, ymin))
    }
}

/// Map face coordinates to the cube layout. The inverse affine of
/// [`cube_to_face`]; always succeeds for in-range input.
#[must_use]
pub fn face_to_cube(x: f64, y: f64, face: Face) -> (f64, f64) {
    debug_assert!((-1.0..=1.0).contains(&x), "x out of range: {x}");
    debug_assert!((-1.0..=1.0).contains(&y), "y out of range: {y}");
    let (ox, oy) = face.layout_origin();
    (ox + (x + 1.0) * 0.5, oy + (y + 1.0) * 0.5)
}
