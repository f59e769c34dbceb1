//! Per-face coverage of geographic extents.
//!
//! Splits an arbitrary geographic query rectangle into face-local
//! rectangles, one per face it touches. Equatorial faces are bounded
//! exactly (longitude maps to x alone, and y is monotone in latitude
//! with extremes at the corner meridians); the polar caps are bounded by
//! sampling the query boundary, with the cardinal meridians and the
//! pole added since coordinate extremes can occur there.

use std::f64::consts::FRAC_PI_4;

use glam::DVec3;

use quadsphere_geo::{Extent, Geographic};

use crate::Face;

/// Latitude of the polar faces' corners; the caps reach no lower.
/// Equals asin(1/√3) in degrees.
const POLAR_RIM_LAT: f64 = 35.264_389_682_754_654;

/// Uniform samples per query-boundary edge when bounding a polar cap.
const POLAR_EDGE_SAMPLES: usize = 16;

/// Tolerance for accepting samples on a face edge.
const EDGE_EPSILON: f64 = 1e-9;

/// Decompose a geographic extent (degrees, longitude in \[−180, 180\])
/// into per-face coverage rectangles in face coordinates.
///
/// Faces the query only touches along an edge are included with a
/// degenerate (zero-area) rectangle; faces it misses are absent. An
/// invalid or off-globe extent yields an empty result.
#[must_use]
pub fn face_extents(query: &Extent) -> Vec<(Face, Extent)> {
    let mut out = Vec::new();
    if !query.is_valid() {
        return out;
    }
    let query = match query.intersection(&Extent::FULL_GLOBE) {
        Some(clipped) => clipped,
        None => return out,
    };
    for face in Face::ALL {
        let rect = if face.is_equatorial() {
            equatorial_rect(face, &query)
        } else {
            polar_rect(face, &query)
        };
        if let Some(rect) = rect {
            out.push((face, rect));
        }
    }
    out
}

fn equatorial_rect(face: Face, query: &Extent) -> Option<Extent> {
    let lat0 = query.ymin.max(-45.0);
    let lat1 = query.ymax.min(45.0);
    if lat0 > lat1 {
        return None;
    }

    // Longitude offsets from the face's central meridian covered by the
    // query, folding across the antimeridian for the 180° face.
    let center_lon = face.center().lon;
    let mut dmin = f64::MAX;
    let mut dmax = f64::MIN;
    for offset in [-360.0, 0.0, 360.0] {
        let lo = (query.xmin + offset - center_lon).max(-45.0);
        let hi = (query.xmax + offset - center_lon).min(45.0);
        if lo <= hi {
            dmin = dmin.min(lo);
            dmax = dmax.max(hi);
        }
    }
    if dmin > dmax {
        return None;
    }

    // y is monotone in latitude; for a fixed latitude its magnitude
    // peaks at the widest meridian offset and dips at the central one.
    let mut dlons = vec![dmin, dmax];
    if dmin < 0.0 && dmax > 0.0 {
        dlons.push(0.0);
    }
    let mut ymin = f64::MAX;
    let mut ymax = f64::MIN;
    for &lat in &[lat0, lat1] {
        for &dlon in &dlons {
            let y = (lat.to_radians().tan() / dlon.to_radians().cos()).atan() / FRAC_PI_4;
            ymin = ymin.min(y);
            ymax = ymax.max(y);
        }
    }

    Some(Extent::new(
        dmin / 45.0,
        ymin.clamp(-1.0, 1.0),
        dmax / 45.0,
        ymax.clamp(-1.0, 1.0),
    ))
}

fn polar_rect(face: Face, query: &Extent) -> Option<Extent> {
    let (band_min, band_max) = if face == Face::North {
        (POLAR_RIM_LAT, 90.0)
    } else {
        (-90.0, -POLAR_RIM_LAT)
    };
    let lat0 = query.ymin.max(band_min);
    let lat1 = query.ymax.min(band_max);
    if lat0 > lat1 {
        return None;
    }

    let mut rect = Extent::empty();
    let mut any = false;
    let mut visit = |lat: f64, lon: f64| {
        if let Some((x, y)) = project_clamped(Geographic::new(lat, lon).to_unit_vector(), face) {
            rect.expand_to(x, y);
            any = true;
        }
    };

    // Top and bottom edges of the clipped query, with the cardinal
    // meridians added: x and y extremes sit on them.
    let mut lons: Vec<f64> = (0..=POLAR_EDGE_SAMPLES)
        .map(|i| {
            query.xmin + query.width() * i as f64 / POLAR_EDGE_SAMPLES as f64
        })
        .collect();
    for cardinal in [-180.0, -135.0, -90.0, -45.0, 0.0, 45.0, 90.0, 135.0, 180.0] {
        if cardinal > query.xmin && cardinal < query.xmax {
            lons.push(cardinal);
        }
    }
    for &lat in &[lat0, lat1] {
        for &lon in &lons {
            visit(lat, lon);
        }
    }

    // Side edges.
    for &lon in &[query.xmin, query.xmax] {
        for i in 0..=POLAR_EDGE_SAMPLES {
            visit(
                lat0 + (lat1 - lat0) * i as f64 / POLAR_EDGE_SAMPLES as f64,
                lon,
            );
        }
    }

    // The pole itself maps to the face center.
    if (face == Face::North && lat1 >= 90.0) || (face == Face::South && lat0 <= -90.0) {
        rect.expand_to(0.0, 0.0);
        any = true;
    }

    if any && rect.is_valid() { Some(rect) } else { None }
}

/// Project a direction onto one face, rejecting directions that belong
/// to another face and clamping edge overshoot within tolerance.
fn project_clamped(dir: DVec3, face: Face) -> Option<(f64, f64)> {
    let depth = dir.dot(face.normal());
    if depth <= 0.0 {
        return None;
    }
    let x = (dir.dot(face.tangent()) / depth).atan() / FRAC_PI_4;
    let y = (dir.dot(face.bitangent()) / depth).atan() / FRAC_PI_4;
    if x.abs() > 1.0 + EDGE_EPSILON || y.abs() > 1.0 + EDGE_EPSILON {
        return None;
    }
    Some((x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon_to_face_coords;

    const EPSILON: f64 = 1e-9;

    fn rect_for(face: Face, rects: &[(Face, Extent)]) -> Option<Extent> {
        rects.iter().find(|(f, _)| *f == face).map(|(_, r)| *r)
    }

    #[test]
    fn test_full_globe_covers_all_faces_fully() {
        let rects = face_extents(&Extent::FULL_GLOBE);
        assert_eq!(rects.len(), 6);
        for (face, rect) in rects {
            assert!(
                (rect.xmin + 1.0).abs() < EPSILON
                    && (rect.ymin + 1.0).abs() < EPSILON
                    && (rect.xmax - 1.0).abs() < EPSILON
                    && (rect.ymax - 1.0).abs() < EPSILON,
                "full globe does not fully cover {face:?}: {rect}"
            );
        }
    }

    #[test]
    fn test_small_equatorial_query_hits_one_face() {
        let query = Extent::new(-10.0, -10.0, 10.0, 10.0);
        let rects = face_extents(&query);
        assert_eq!(rects.len(), 1);
        let (face, rect) = rects[0];
        assert_eq!(face, Face::Equator0);

        // Every corner of the query must fall inside the rectangle.
        for (lat, lon) in [(-10.0, -10.0), (-10.0, 10.0), (10.0, -10.0), (10.0, 10.0)] {
            let fc = lat_lon_to_face_coords(lat, lon, Some(Face::Equator0)).unwrap();
            assert!(
                rect.contains(fc.x, fc.y),
                "query corner ({lat}, {lon}) -> {fc} outside {rect}"
            );
        }
    }

    #[test]
    fn test_query_across_equatorial_seam_hits_both_faces() {
        let query = Extent::new(40.0, -10.0, 50.0, 10.0);
        let rects = face_extents(&query);
        assert_eq!(rects.len(), 2);
        let zero = rect_for(Face::Equator0, &rects).unwrap();
        let ninety = rect_for(Face::Equator90, &rects).unwrap();
        assert!((zero.xmax - 1.0).abs() < EPSILON, "face 0 piece must reach its east edge");
        assert!((ninety.xmin + 1.0).abs() < EPSILON, "face 1 piece must start at its west edge");
    }

    #[test]
    fn test_query_across_antimeridian_face() {
        // Normalized longitudes: the 180° face is reached from both
        // sides of the ±180 seam.
        let east_side = face_extents(&Extent::new(170.0, -5.0, 180.0, 5.0));
        let rect = rect_for(Face::Equator180, &east_side).unwrap();
        assert!((rect.xmin + 10.0 / 45.0).abs() < EPSILON);
        assert!(rect.xmax.abs() < EPSILON);

        let west_side = face_extents(&Extent::new(-180.0, -5.0, -170.0, 5.0));
        let rect = rect_for(Face::Equator180, &west_side).unwrap();
        assert!(rect.xmin.abs() < EPSILON);
        assert!((rect.xmax - 10.0 / 45.0).abs() < EPSILON);
    }

    #[test]
    fn test_polar_cap_query() {
        let query = Extent::new(-180.0, 60.0, 180.0, 90.0);
        let rects = face_extents(&query);
        assert_eq!(rects.len(), 1);
        let (face, rect) = rects[0];
        assert_eq!(face, Face::North);
        // The cap ring at latitude 60 surrounds the face center.
        assert!(rect.contains(0.0, 0.0), "pole missing from cap rect {rect}");
        for lon in [-180.0, -90.0, 0.0, 90.0] {
            let fc = lat_lon_to_face_coords(60.0, lon, Some(Face::North)).unwrap();
            assert!(
                rect.contains(fc.x, fc.y),
                "cap ring point at lon {lon} -> {fc} outside {rect}"
            );
        }
    }

    #[test]
    fn test_mid_latitude_band_spans_equatorial_and_polar() {
        let query = Extent::new(-5.0, 30.0, 5.0, 50.0);
        let rects = face_extents(&query);
        let faces: Vec<Face> = rects.iter().map(|(f, _)| *f).collect();
        assert!(faces.contains(&Face::Equator0), "band should touch face 0");
        assert!(faces.contains(&Face::North), "band should touch the north cap");
        assert!(!faces.contains(&Face::South));
    }

    #[test]
    fn test_invalid_or_off_globe_query_is_empty() {
        assert!(face_extents(&Extent::new(10.0, 10.0, 0.0, 20.0)).is_empty());
        assert!(face_extents(&Extent::new(0.0, f64::NAN, 1.0, 1.0)).is_empty());
        assert!(face_extents(&Extent::new(-200.0, -95.0, -190.0, -92.0)).is_empty());
    }

    #[test]
    fn test_covered_points_fall_inside_reported_rects() {
        // Sample the query densely; every sample's face rect must
        // contain its face coordinates.
        let query = Extent::new(20.0, 10.0, 80.0, 70.0);
        let rects = face_extents(&query);
        for lat_step in 0..=12 {
            for lon_step in 0..=12 {
                let lat = query.ymin + query.height() * lat_step as f64 / 12.0;
                let lon = query.xmin + query.width() * lon_step as f64 / 12.0;
                let fc = lat_lon_to_face_coords(lat, lon, None).unwrap();
                let rect = rect_for(fc.face, &rects)
                    .unwrap_or_else(|| panic!("face {:?} missing for ({lat}, {lon})", fc.face));
                let inside = fc.x >= rect.xmin - EPSILON
                    && fc.x <= rect.xmax + EPSILON
                    && fc.y >= rect.ymin - EPSILON
                    && fc.y <= rect.ymax + EPSILON;
                assert!(inside, "({lat}, {lon}) -> {fc} outside coverage {rect}");
            }
        }
    }
}
