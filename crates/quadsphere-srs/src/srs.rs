//! The spatial-reference capability interface.

use quadsphere_geo::Extent;

use crate::TransformError;

/// Kind tag for the closed set of spatial-reference variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SrsKind {
    /// Geographic degrees (x = longitude, y = latitude).
    Geographic,
    /// A projected planar system in meters.
    Projected,
    /// The six-face cube layout, [0,4]×[0,3].
    Cube,
}

impl std::fmt::Display for SrsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SrsKind::Geographic => "geographic",
            SrsKind::Projected => "projected",
            SrsKind::Cube => "cube",
        };
        f.write_str(name)
    }
}

/// A coordinate system that can hand its coordinates to, and take them
/// from, the geographic hub of the reprojection pipeline.
///
/// Implementations are immutable after construction and shareable
/// across threads; every method is a pure function of its inputs.
pub trait SpatialReference: Send + Sync {
    /// Which variant this reference is.
    fn kind(&self) -> SrsKind;

    /// Registry name of this reference.
    fn name(&self) -> &str;

    /// Convert a coordinate of this reference to geographic degrees
    /// (longitude, latitude). Applied immediately before a generic
    /// ellipsoidal reprojection step.
    fn pre_transform(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError>;

    /// Convert geographic degrees (longitude, latitude) to a coordinate
    /// of this reference. Applied immediately after a generic
    /// ellipsoidal reprojection step.
    fn post_transform(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError>;

    /// Optimized direct conversion to `to`, available only for known
    /// cheap pairs. Fails with [`TransformError::FallbackRequired`]
    /// otherwise; callers then run [`reproject`].
    fn transform(
        &self,
        x: f64,
        y: f64,
        to: &dyn SpatialReference,
    ) -> Result<(f64, f64), TransformError>;

    /// Direct conversion when available, generic pipeline otherwise.
    fn transform_with_fallback(
        &self,
        x: f64,
        y: f64,
        to: &dyn SpatialReference,
    ) -> Result<(f64, f64), TransformError> {
        match self.transform(x, y, to) {
            Err(TransformError::FallbackRequired { .. }) => {
                let (lon, lat) = self.pre_transform(x, y)?;
                to.post_transform(lon, lat)
            }
            other => other,
        }
    }

    /// Transform a batch of points in place.
    ///
    /// Applies the same per-point logic as the scalar form. With
    /// `ignore_errors` set, points that fail are replaced by the
    /// invalid-coordinate sentinel `(NaN, NaN)` instead of aborting the
    /// batch.
    fn transform_points(
        &self,
        points: &mut [(f64, f64)],
        to: &dyn SpatialReference,
        ignore_errors: bool,
    ) -> Result<(), TransformError> {
        for point in points.iter_mut() {
            match self.transform_with_fallback(point.0, point.1, to) {
                Ok(out) => *point = out,
                Err(_) if ignore_errors => *point = (f64::NAN, f64::NAN),
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Transform a `width` × `height` grid of points sampled across the
    /// extent, row-major from the minimum corner. Error handling as in
    /// [`Self::transform_points`].
    fn transform_extent_points(
        &self,
        to: &dyn SpatialReference,
        extent: &Extent,
        width: usize,
        height: usize,
        ignore_errors: bool,
    ) -> Result<Vec<(f64, f64)>, TransformError> {
        if !extent.is_valid() || width < 2 || height < 2 {
            return Err(TransformError::InvalidExtent);
        }
        let mut points = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                points.push((
                    extent.xmin + extent.width() * col as f64 / (width - 1) as f64,
                    extent.ymin + extent.height() * row as f64 / (height - 1) as f64,
                ));
            }
        }
        self.transform_points(&mut points, to, ignore_errors)?;
        Ok(points)
    }

    /// Transform a bounding rectangle into `to`.
    ///
    /// The default samples a grid across the extent and takes the
    /// bounds of the transformable samples; implementations whose
    /// projections have seams or singularities inside an extent
    /// override this to split the extent first.
    fn transform_extent(
        &self,
        to: &dyn SpatialReference,
        extent: &Extent,
    ) -> Result<Extent, TransformError> {
        let points = self.transform_extent_points(to, extent, 8, 8, true)?;
        bounds_of(&points).ok_or(TransformError::InvalidExtent)
    }
}

/// The generic reprojection pipeline: source pre-transform to the
/// geographic hub, the ellipsoidal datum step (the identity while all
/// references share one ellipsoid), then destination post-transform.
pub fn reproject(
    from: &dyn SpatialReference,
    to: &dyn SpatialReference,
    x: f64,
    y: f64,
) -> Result<(f64, f64), TransformError> {
    let (lon, lat) = from.pre_transform(x, y)?;
    to.post_transform(lon, lat)
}

/// Bounds of the finite points in a transformed sample set.
pub(crate) fn bounds_of(points: &[(f64, f64)]) -> Option<Extent> {
    let mut bounds = Extent::empty();
    let mut any = false;
    for &(x, y) in points {
        if x.is_finite() && y.is_finite() {
            bounds.expand_to(x, y);
            any = true;
        }
    }
    if any { Some(bounds) } else { None }
}
