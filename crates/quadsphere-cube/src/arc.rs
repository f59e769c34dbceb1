//! Great-circle arc length and point-to-arc distance.

use glam::{DVec2, DVec3};

use quadsphere_geo::WGS84_SEMI_MAJOR;

use crate::{Face, FaceCoord, face_to_direction};

/// Radius used to scale angular results to meters: the WGS-84
/// semi-major axis, matching the convention of the rest of the system.
pub const SPHERE_RADIUS: f64 = WGS84_SEMI_MAJOR;

/// Squared-length threshold below which a cross product is treated as
/// degenerate (coincident or antipodal endpoints).
const DEGENERATE_EPSILON: f64 = 1e-24;

/// Great-circle length in meters between two coordinates on one face.
///
/// Symmetric in its endpoints; zero when they coincide.
#[must_use]
pub fn arc_length(coord1: DVec2, coord2: DVec2, face: Face) -> f64 {
    let d1 = face_to_direction(&FaceCoord::new(face, coord1.x, coord1.y));
    let d2 = face_to_direction(&FaceCoord::new(face, coord2.x, coord2.y));
    d1.dot(d2).clamp(-1.0, 1.0).acos() * SPHERE_RADIUS
}

/// Minimum Euclidean (chord) distance from an arbitrary 3D point to the
/// great-circle arc between two face coordinates, with the arc scaled
/// to [`SPHERE_RADIUS`].
#[must_use]
pub fn distance_to_segment(p: DVec3, coord1: DVec2, coord2: DVec2, face: Face) -> f64 {
    let d1 = face_to_direction(&FaceCoord::new(face, coord1.x, coord1.y));
    let d2 = face_to_direction(&FaceCoord::new(face, coord2.x, coord2.y));
    distance_to_segment_dc(p, d1, d2)
}

/// Direction-cosine overload of [`distance_to_segment`].
///
/// The nearest point of the arc's plane is found by projecting `p` into
/// the plane through the sphere center containing both endpoints; when
/// the projection's arc parameter falls outside \[0, 1\] the nearer
/// endpoint is used instead. A degenerate segment reduces to the
/// point-to-endpoint distance.
#[must_use]
pub fn distance_to_segment_dc(p: DVec3, dc1: DVec3, dc2: DVec3) -> f64 {
    let e1 = dc1 * SPHERE_RADIUS;
    let e2 = dc2 * SPHERE_RADIUS;

    let cross = dc1.cross(dc2);
    if cross.length_squared() < DEGENERATE_EPSILON {
        // Coincident endpoints (point distance) or antipodal endpoints
        // (plane undefined); either way the endpoints answer.
        return (p - e1).length().min((p - e2).length());
    }
    let plane_normal = cross.normalize();

    let in_plane = p - p.dot(plane_normal) * plane_normal;
    if in_plane.length_squared() < DEGENERATE_EPSILON {
        // p sits on the plane's axis; every arc point is equidistant,
        // so the clamped answer is an endpoint.
        return (p - e1).length().min((p - e2).length());
    }
    let q = in_plane.normalize();

    // Arc parameter of the projected point: inside the segment iff its
    // angles to both endpoints stay within the total arc angle.
    let total = dc1.dot(dc2).clamp(-1.0, 1.0).acos();
    let from_start = dc1.dot(q).clamp(-1.0, 1.0).acos();
    let from_end = q.dot(dc2).clamp(-1.0, 1.0).acos();
    if from_start <= total && from_end <= total {
        (p - q * SPHERE_RADIUS).length()
    } else {
        (p - e1).length().min((p - e2).length())
    }
}
