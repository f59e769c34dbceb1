//! Per-face locator: tile-local unit coordinates ↔ world geocentric.

use glam::DVec3;

use quadsphere_geo::{Ellipsoid, Extent};
use quadsphere_cube::{CubeError, Face, face_coords_to_lat_lon, lat_lon_to_face_coords};

use crate::{CubeProfile, TileKey};

/// Errors reported by [`FaceLocator`] conversions.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LocatorError {
    /// The underlying projection rejected the coordinate.
    #[error(transparent)]
    Cube(#[from] CubeError),

    /// The model position does not project onto this locator's face;
    /// the caller picked the wrong locator.
    #[error("model position does not project onto face {0:?}")]
    OffFace(Face),

    /// An input coordinate was NaN or infinite.
    #[error("input coordinate is not finite")]
    NonFinite,
}

/// Maps a tile's local unit coordinates to world geocentric positions
/// and back, for one fixed face.
///
/// Local coordinates are (u, v) in \[0, 1\] across the locator's
/// rectangle plus an elevation in meters above the ellipsoid.
/// Immutable after construction; one locator per tile is built during
/// mesh generation and shared read-only.
#[derive(Clone, Copy, Debug)]
pub struct FaceLocator {
    face: Face,
    face_extent: Extent,
    ellipsoid: Ellipsoid,
}

impl FaceLocator {
    /// A locator spanning the whole face.
    #[must_use]
    pub fn new(face: Face) -> Self {
        Self::with_face_extent(face, Extent::new(-1.0, -1.0, 1.0, 1.0))
    }

    /// A locator spanning one rectangle of the face, in face
    /// coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle is degenerate or leaves \[−1, 1\]².
    #[must_use]
    pub fn with_face_extent(face: Face, face_extent: Extent) -> Self {
        assert!(
            face_extent.is_valid() && face_extent.width() > 0.0 && face_extent.height() > 0.0,
            "degenerate locator extent {face_extent}"
        );
        assert!(
            face_extent.xmin >= -1.0
                && face_extent.ymin >= -1.0
                && face_extent.xmax <= 1.0
                && face_extent.ymax <= 1.0,
            "locator extent {face_extent} leaves the face"
        );
        Self {
            face,
            face_extent,
            ellipsoid: Ellipsoid::WGS84,
        }
    }

    /// The locator for one tile of the profile.
    #[must_use]
    pub fn for_tile(key: &TileKey, profile: &CubeProfile) -> Self {
        let face = profile.get_face(key);
        let (ox, oy) = face.layout_origin();
        let tile = key.extent();
        // Undo the cell's affine map to get face coordinates.
        let face_extent = Extent::new(
            2.0 * (tile.xmin - ox) - 1.0,
            2.0 * (tile.ymin - oy) - 1.0,
            2.0 * (tile.xmax - ox) - 1.0,
            2.0 * (tile.ymax - oy) - 1.0,
        );
        Self::with_face_extent(face, face_extent)
    }

    /// The face this locator is fixed to.
    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Convert tile-local (u, v, elevation) to a world geocentric
    /// position in meters.
    pub fn convert_local_to_model(&self, local: DVec3) -> Result<DVec3, LocatorError> {
        if !local.is_finite() {
            return Err(LocatorError::NonFinite);
        }
        let fx = self.face_extent.xmin + local.x * self.face_extent.width();
        let fy = self.face_extent.ymin + local.y * self.face_extent.height();
        let geo = face_coords_to_lat_lon(fx, fy, self.face)?;
        Ok(self.ellipsoid.to_geocentric(geo, local.z))
    }

    /// Convert a world geocentric position back to tile-local
    /// (u, v, elevation).
    ///
    /// Fails with [`LocatorError::OffFace`] when the position does not
    /// project onto this locator's face. Positions on the face but
    /// outside the locator's rectangle yield locals outside \[0, 1\].
    pub fn convert_model_to_local(&self, model: DVec3) -> Result<DVec3, LocatorError> {
        if !model.is_finite() {
            return Err(LocatorError::NonFinite);
        }
        let (geo, height) = self.ellipsoid.to_geodetic(model);
        let fc = match lat_lon_to_face_coords(geo.lat, geo.lon, Some(self.face)) {
            Ok(fc) => fc,
            Err(CubeError::FaceMismatch(face)) => {
                log::warn!("model position {model} does not project onto face {face:?}");
                return Err(LocatorError::OffFace(face));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(DVec3::new(
            (fc.x - self.face_extent.xmin) / self.face_extent.width(),
            (fc.y - self.face_extent.ymin) / self.face_extent.height(),
            height,
        ))
    }
}
