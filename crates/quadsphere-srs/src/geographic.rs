//! Geographic and projected spatial-reference variants.

use std::f64::consts::PI;

use quadsphere_geo::{Extent, WGS84_SEMI_MAJOR};
use quadsphere_cube::{face_extents, face_to_cube};

use crate::srs::bounds_of;
use crate::{SpatialReference, SrsKind, TransformError};

/// Geographic degrees on the WGS-84 ellipsoid: the hub every other
/// reference pre/post-transforms through.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeographicSrs;

impl SpatialReference for GeographicSrs {
    fn kind(&self) -> SrsKind {
        SrsKind::Geographic
    }

    fn name(&self) -> &str {
        "wgs84"
    }

    fn pre_transform(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        check_finite(x, y)?;
        Ok((x, y))
    }

    fn post_transform(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        check_finite(x, y)?;
        Ok((x, y))
    }

    fn transform(
        &self,
        x: f64,
        y: f64,
        to: &dyn SpatialReference,
    ) -> Result<(f64, f64), TransformError> {
        match to.kind() {
            SrsKind::Geographic => self.pre_transform(x, y),
            // Direct path: hand geographic degrees straight to the cube.
            SrsKind::Cube => to.post_transform(x, y),
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
            // A geographic extent can touch several faces; a straight
            // corner remap would undershoot. Decompose per face and
            // union the face cells' layout rectangles.
            let mut bounds = Extent::empty();
            let mut any = false;
            for (face, rect) in face_extents(extent) {
                let (xmin, ymin) = face_to_cube(rect.xmin, rect.ymin, face);
                let (xmax, ymax) = face_to_cube(rect.xmax, rect.ymax, face);
                bounds.expand_to(xmin, ymin);
                bounds.expand_to(xmax, ymax);
                any = true;
            }
            return if any {
                Ok(bounds)
            } else {
                Err(TransformError::InvalidExtent)
            };
        }
        let points = self.transform_extent_points(to, extent, 8, 8, true)?;
        bounds_of(&points).ok_or(TransformError::InvalidExtent)
    }
}

/// Equirectangular ("plate carrée") projected meters on the WGS-84
/// sphere: the projected variant of the closed set. No cheap pair with
/// the cube exists, so cube conversions go through the generic
/// pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlateCarreeSrs;

impl PlateCarreeSrs {
    /// Meters per degree along the equator.
    const METERS_PER_DEGREE: f64 = WGS84_SEMI_MAJOR * PI / 180.0;
}

impl SpatialReference for PlateCarreeSrs {
    fn kind(&self) -> SrsKind {
        SrsKind::Projected
    }

    fn name(&self) -> &str {
        "plate-carree"
    }

    fn pre_transform(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        check_finite(x, y)?;
        Ok((x / Self::METERS_PER_DEGREE, y / Self::METERS_PER_DEGREE))
    }

    fn post_transform(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        check_finite(x, y)?;
        Ok((x * Self::METERS_PER_DEGREE, y * Self::METERS_PER_DEGREE))
    }

    fn transform(
        &self,
        x: f64,
        y: f64,
        to: &dyn SpatialReference,
    ) -> Result<(f64, f64), TransformError> {
        match to.kind() {
            SrsKind::Projected => {
                check_finite(x, y)?;
                Ok((x, y))
            }
            SrsKind::Geographic | SrsKind::Cube => Err(TransformError::FallbackRequired {
                from: self.kind(),
                to: to.kind(),
            }),
        }
    }
}

pub(crate) fn check_finite(x: f64, y: f64) -> Result<(), TransformError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(TransformError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reproject;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_geographic_identity() {
        let geo = GeographicSrs;
        assert_eq!(geo.pre_transform(12.5, -33.0).unwrap(), (12.5, -33.0));
        assert_eq!(geo.post_transform(12.5, -33.0).unwrap(), (12.5, -33.0));
        assert_eq!(geo.transform(12.5, -33.0, &GeographicSrs).unwrap(), (12.5, -33.0));
    }

    #[test]
    fn test_plate_carree_roundtrip() {
        let proj = PlateCarreeSrs;
        let (x, y) = proj.post_transform(45.0, -30.0).unwrap();
        assert!((x - WGS84_SEMI_MAJOR * PI / 4.0).abs() < 1e-3);
        let (lon, lat) = proj.pre_transform(x, y).unwrap();
        assert!((lon - 45.0).abs() < EPSILON);
        assert!((lat + 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_projected_pair_requires_fallback() {
        let geo = GeographicSrs;
        let proj = PlateCarreeSrs;
        assert!(matches!(
            geo.transform(10.0, 10.0, &proj),
            Err(TransformError::FallbackRequired {
                from: SrsKind::Geographic,
                to: SrsKind::Projected,
            })
        ));
        // The generic pipeline covers the pair.
        let (x, y) = reproject(&geo, &proj, 10.0, 10.0).unwrap();
        let (lon, lat) = reproject(&proj, &geo, x, y).unwrap();
        assert!((lon - 10.0).abs() < EPSILON);
        assert!((lat - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            GeographicSrs.pre_transform(f64::NAN, 0.0),
            Err(TransformError::NonFinite)
        );
        assert_eq!(
            PlateCarreeSrs.post_transform(0.0, f64::INFINITY),
            Err(TransformError::NonFinite)
        );
    }

    #[test]
    fn test_transform_points_sentinel() {
        let geo = GeographicSrs;
        let proj = PlateCarreeSrs;
        let mut points = vec![(0.0, 0.0), (f64::NAN, 1.0), (90.0, 45.0)];
        geo.transform_points(&mut points, &proj, true).unwrap();
        assert!(points[0].0.abs() < EPSILON);
        assert!(points[1].0.is_nan() && points[1].1.is_nan());
        assert!((points[2].0 - WGS84_SEMI_MAJOR * PI / 2.0).abs() < 1e-3);

        // Without ignore_errors the batch aborts.
        let mut points = vec![(0.0, 0.0), (f64::NAN, 1.0)];
        assert!(geo.transform_points(&mut points, &proj, false).is_err());
    }

    #[test]
    fn test_geographic_extent_to_projected() {
        let geo = GeographicSrs;
        let proj = PlateCarreeSrs;
        let out = geo
            .transform_extent(&proj, &Extent::new(-45.0, -30.0, 45.0, 60.0))
            .unwrap();
        let scale = PlateCarreeSrs::METERS_PER_DEGREE;
        assert!((out.xmin + 45.0 * scale).abs() < 1e-3);
        assert!((out.xmax - 45.0 * scale).abs() < 1e-3);
        assert!((out.ymin + 30.0 * scale).abs() < 1e-3);
        assert!((out.ymax - 60.0 * scale).abs() < 1e-3);
    }
}
