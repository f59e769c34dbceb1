//! Geographic coordinates in degrees and their unit-sphere representation.

use glam::DVec3;

/// A geographic coordinate in WGS-84-style degrees.
///
/// Latitude is positive north, longitude positive east. Longitude is kept
/// as given (not wrapped) so callers control normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geographic {
    /// Latitude in degrees, in \[−90, 90\].
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Geographic {
    /// Construct a geographic coordinate. Does not validate; see
    /// [`Self::is_valid`].
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both components are finite and latitude is within
    /// \[−90, 90\].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.lat.abs() <= 90.0
    }

    /// Longitude wrapped into \[−180, 180\].
    #[must_use]
    pub fn normalized_lon(&self) -> f64 {
        let mut lon = (self.lon + 180.0).rem_euclid(360.0) - 180.0;
        if lon == -180.0 && self.lon > 0.0 {
            lon = 180.0;
        }
        lon
    }

    /// The direction cosine of this coordinate: a unit vector with +X
    /// toward (0°, 0°), +Y toward (0°, 90°E), and +Z toward the North
    /// Pole.
    #[must_use]
    pub fn to_unit_vector(&self) -> DVec3 {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();
        DVec3::new(
            lat.cos() * lon.cos(),
            lat.cos() * lon.sin(),
            lat.sin(),
        )
    }

    /// Recover a geographic coordinate from a direction cosine.
    ///
    /// The input does not need to be unit length; a zero vector maps to
    /// (0°, 0°).
    #[must_use]
    pub fn from_unit_vector(dir: DVec3) -> Self {
        let horiz = dir.x.hypot(dir.y);
        if horiz == 0.0 && dir.z == 0.0 {
            return Self::new(0.0, 0.0);
        }
        Self::new(dir.z.atan2(horiz).to_degrees(), dir.y.atan2(dir.x).to_degrees())
    }
}

impl std::fmt::Display for Geographic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}°, {:.6}°)", self.lat, self.lon)
    }
}
