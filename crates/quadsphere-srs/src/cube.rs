//! The cube projection as a spatial reference.

use quadsphere_geo::Extent;
use quadsphere_cube::{
    Face, cube_to_face, cube_to_face_extent, face_coords_to_lat_lon, face_to_cube,
    lat_lon_to_face_coords,
};

use crate::geographic::check_finite;
use crate::srs::bounds_of;
use crate::{SpatialReference, SrsKind, TransformError};

/// Layout coordinates of the two pole singularities.
const NORTH_POLE: (f64, f64) = (0.5, 2.5);
const SOUTH_POLE: (f64, f64) = (0.5, 0.5);

/// The six-face cube layout as a spatial reference.
///
/// Coordinates are cube-layout (x, y) in [0,4]×[0,3]. The reference is
/// stateless and immutable; construct it once (typically through the
/// registry) and share it.
#[derive(Debug, Default, Clone, Copy)]
pub struct CubeSrs;

impl SpatialReference for CubeSrs {
    fn kind(&self) -> SrsKind {
        SrsKind::Cube
    }

    fn name(&self) -> &str {
        "unified-cube"
    }

    fn pre_transform(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        let fc = cube_to_face(x, y)?;
        let geo = face_coords_to_lat_lon(fc.x, fc.y, fc.face)?;
        Ok((geo.normalized_lon(), geo.lat))
    }

    fn post_transform(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        check_finite(x, y)?;
        let fc = lat_lon_to_face_coords(y, x, None)?;
        Ok(face_to_cube(fc.x, fc.y, fc.face))
    }

    fn transform(
        &self,
        x: f64,
        y: f64,
        to: &dyn SpatialReference,
    ) -> Result<(f64, f64), TransformError> {
        match to.kind() {
            SrsKind::Cube => {
                check_finite(x, y)?;
                Ok((x, y))
            }
            // Direct path: the cube's own pre-transform lands exactly in
            // geographic degrees.
            SrsKind::Geographic => self.pre_transform(x, y),
            SrsKind::Projected => Err(TransformError::FallbackRequired {
                from: self.kind(),
                to: to.kind(),
            }),
        }
    }

    fn transform_extent(
        &self,
        to: &dyn SpatialReference,
        extent: &Extent,
    ) -> Result<Extent, TransformError> {
        if !extent.is_valid() {
            return Err(TransformError::InvalidExtent);
        }
        if to.kind() == SrsKind::Cube {
            return Ok(*extent);
        }

        // A corner-to-corner remap is wrong whenever the extent crosses
        // a face seam or contains a pole, so split at the integer cell
        // boundaries and union the per-piece bounds.
        let mut bounds = Extent::empty();
        let mut any = false;
        for piece in split_at_cells(extent) {
            let face = match cube_to_face_extent(piece.xmin, piece.ymin, piece.xmax, piece.ymax) {
                Ok(face) => face,
                // Pieces over unused layout cells contribute nothing.
                Err(_) => continue,
            };
            let points = self.transform_extent_points(to, &piece, 5, 5, true)?;
            if let Some(piece_bounds) = bounds_of(&points) {
                bounds = if any { bounds.union(&piece_bounds) } else { piece_bounds };
                any = true;
            }
            // A piece holding a pole spans every meridian; the sampled
            // bounds cannot see that, so widen explicitly.
            let pole = match face {
                Face::North => Some((NORTH_POLE, 90.0)),
                Face::South => Some((SOUTH_POLE, -90.0)),
                _ => None,
            };
            if let Some(((px, py), pole_lat)) = pole {
                if piece.contains(px, py) {
                    for lon in [-180.0, 180.0] {
                        let (x, y) = to.post_transform(lon, pole_lat)?;
                        bounds.expand_to(x, y);
                        any = true;
                    }
                }
            }
        }
        if any {
            Ok(bounds)
        } else {
            Err(TransformError::InvalidExtent)
        }
    }
}

/// Split a layout extent into pieces that each stay inside one unit
/// cell, cutting along the integer grid lines.
fn split_at_cells(extent: &Extent) -> Vec<Extent> {
    let xs = cuts(extent.xmin, extent.xmax);
    let ys = cuts(extent.ymin, extent.ymax);
    let mut pieces = Vec::with_capacity((xs.len() - 1) * (ys.len() - 1));
    for j in 0..ys.len() - 1 {
        for i in 0..xs.len() - 1 {
            pieces.push(Extent::new(xs[i], ys[j], xs[i + 1], ys[j + 1]));
        }
    }
    pieces
}

fn cuts(min: f64, max: f64) -> Vec<f64> {
    let mut out = vec![min];
    let mut k = min.floor() + 1.0;
    while k < max {
        if k > min {
            out.push(k);
        }
        k += 1.0;
    }
    out.push(max);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeographicSrs, PlateCarreeSrs, reproject};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_pre_post_roundtrip() {
        let cube = CubeSrs;
        for &(x, y) in &[
            (0.3, 1.4),
            (1.7, 1.2),
            (2.5, 1.5),
            (3.9, 1.9),
            (0.4, 2.3),
            (0.6, 0.7),
        ] {
            let (lon, lat) = cube.pre_transform(x, y).unwrap();
            let (bx, by) = cube.post_transform(lon, lat).unwrap();
            assert!(
                (bx - x).abs() < EPSILON && (by - y).abs() < EPSILON,
                "roundtrip ({x}, {y}) -> ({lon}, {lat}) -> ({bx}, {by})"
            );
        }
    }

    #[test]
    fn test_face_centers_map_to_geographic_centers() {
        let cube = CubeSrs;
        for face in Face::ALL {
            let (ox, oy) = face.layout_origin();
            let (lon, lat) = cube.pre_transform(ox + 0.5, oy + 0.5).unwrap();
            let center = face.center();
            assert!(
                (lat - center.lat).abs() < EPSILON,
                "latitude of {face:?} center: {lat}"
            );
            if face.is_equatorial() {
                let center_geo = quadsphere_geo::Geographic::new(center.lat, center.lon);
                assert!(
                    (lon - center_geo.normalized_lon()).abs() < EPSILON,
                    "longitude of {face:?} center: {lon}"
                );
            }
        }
    }

    #[test]
    fn test_direct_path_to_geographic() {
        let cube = CubeSrs;
        let geo = GeographicSrs;
        let direct = cube.transform(0.25, 1.75, &geo).unwrap();
        let pipeline = reproject(&cube, &geo, 0.25, 1.75).unwrap();
        assert!((direct.0 - pipeline.0).abs() < EPSILON);
        assert!((direct.1 - pipeline.1).abs() < EPSILON);
    }

    #[test]
    fn test_projected_pair_requires_fallback() {
        let cube = CubeSrs;
        let proj = PlateCarreeSrs;
        assert!(matches!(
            cube.transform(0.5, 1.5, &proj),
            Err(TransformError::FallbackRequired { from: SrsKind::Cube, to: SrsKind::Projected })
        ));
        // And the pipeline works for the same pair.
        let (x, _) = reproject(&cube, &proj, 0.5, 1.5).unwrap();
        assert!(x.is_finite());
    }

    #[test]
    fn test_out_of_layout_coordinates_fail() {
        let cube = CubeSrs;
        assert!(cube.pre_transform(3.5, 2.5).is_err());
        assert!(cube.pre_transform(-0.1, 1.0).is_err());
        assert!(cube.post_transform(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_transform_points_sentinel_on_dead_cell() {
        let cube = CubeSrs;
        let geo = GeographicSrs;
        let mut points = vec![(0.5, 1.5), (3.5, 2.5), (0.5, 2.5)];
        cube.transform_points(&mut points, &geo, true).unwrap();
        assert!(points[0].0.is_finite());
        assert!(points[1].0.is_nan() && points[1].1.is_nan());
        assert!((points[2].1 - 90.0).abs() < EPSILON, "north pole latitude");

        let mut points = vec![(3.5, 2.5)];
        assert!(cube.transform_points(&mut points, &geo, false).is_err());
    }

    #[test]
    fn test_extent_single_face_to_geographic() {
        let cube = CubeSrs;
        let geo = GeographicSrs;
        // Interior of face 0, symmetric about its center.
        let out = cube
            .transform_extent(&geo, &Extent::new(0.25, 1.25, 0.75, 1.75))
            .unwrap();
        assert!((out.xmin + 22.5).abs() < 1e-6, "west bound {}", out.xmin);
        assert!((out.xmax - 22.5).abs() < 1e-6, "east bound {}", out.xmax);
        assert!((out.ymin + 22.5).abs() < 1e-6, "south bound {}", out.ymin);
        assert!((out.ymax - 22.5).abs() < 1e-6, "north bound {}", out.ymax);
    }

    #[test]
    fn test_extent_across_face_seam() {
        let cube = CubeSrs;
        let geo = GeographicSrs;
        // Straddles the face 0 / face 1 seam at layout x = 1 (45°E).
        let out = cube
            .transform_extent(&geo, &Extent::new(0.75, 1.4, 1.25, 1.6))
            .unwrap();
        assert!(out.xmin < 45.0 && out.xmax > 45.0, "seam not inside {out}");
        assert!((out.xmin - 22.5).abs() < 1e-6);
        assert!((out.xmax - 67.5).abs() < 1e-6);
    }

    #[test]
    fn test_extent_with_pole_spans_all_longitudes() {
        let cube = CubeSrs;
        let geo = GeographicSrs;
        let out = cube
            .transform_extent(&geo, &Extent::new(0.25, 2.25, 0.75, 2.75))
            .unwrap();
        assert!((out.xmin + 180.0).abs() < EPSILON);
        assert!((out.xmax - 180.0).abs() < EPSILON);
        assert!((out.ymax - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_extent_over_dead_cells_only_fails() {
        let cube = CubeSrs;
        let geo = GeographicSrs;
        let result = cube.transform_extent(&geo, &Extent::new(1.25, 2.25, 1.75, 2.75));
        assert_eq!(result, Err(TransformError::InvalidExtent));
    }

    #[test]
    fn test_geographic_extent_to_cube_unions_faces() {
        let geo = GeographicSrs;
        let cube = CubeSrs;
        // Straddles 45°E: face 0 and face 1 cells both contribute.
        let out = geo
            .transform_extent(&cube, &Extent::new(40.0, -10.0, 50.0, 10.0))
            .unwrap();
        assert!(out.xmin < 1.0 && out.xmax > 1.0, "cell seam not inside {out}");

        // The full globe unions to the populated layout band plus caps.
        let out = geo.transform_extent(&cube, &Extent::FULL_GLOBE).unwrap();
        assert!((out.xmin - 0.0).abs() < EPSILON);
        assert!((out.xmax - 4.0).abs() < EPSILON);
        assert!((out.ymin - 0.0).abs() < EPSILON);
        assert!((out.ymax - 3.0).abs() < EPSILON);
    }
}
