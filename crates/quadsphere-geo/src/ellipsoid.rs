//! Ellipsoid model and geodetic ↔ geocentric conversions.

use glam::DVec3;

use crate::Geographic;

/// WGS-84 semi-major axis (meters).
pub const WGS84_SEMI_MAJOR: f64 = 6_378_137.0;
/// WGS-84 semi-minor axis (meters).
pub const WGS84_SEMI_MINOR: f64 = 6_356_752.314_245;

/// A reference ellipsoid for geodetic ↔ geocentric conversion.
///
/// Immutable after construction; all methods are pure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Equatorial radius in meters.
    pub semi_major: f64,
    /// Polar radius in meters.
    pub semi_minor: f64,
}

impl Ellipsoid {
    /// The WGS-84 ellipsoid.
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major: WGS84_SEMI_MAJOR,
        semi_minor: WGS84_SEMI_MINOR,
    };

    /// Construct an ellipsoid from its axes.
    ///
    /// # Panics
    ///
    /// Panics if either axis is not positive or the minor axis exceeds
    /// the major axis.
    #[must_use]
    pub fn new(semi_major: f64, semi_minor: f64) -> Self {
        assert!(semi_major > 0.0, "semi-major axis must be positive");
        assert!(semi_minor > 0.0, "semi-minor axis must be positive");
        assert!(
            semi_minor <= semi_major,
            "semi-minor axis {semi_minor} exceeds semi-major {semi_major}"
        );
        Self {
            semi_major,
            semi_minor,
        }
    }

    /// First eccentricity squared.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        let a2 = self.semi_major * self.semi_major;
        let b2 = self.semi_minor * self.semi_minor;
        (a2 - b2) / a2
    }

    /// Second eccentricity squared.
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let a2 = self.semi_major * self.semi_major;
        let b2 = self.semi_minor * self.semi_minor;
        (a2 - b2) / b2
    }

    /// Convert geodetic (degrees, meters above the ellipsoid) to a
    /// geocentric Cartesian position in meters.
    #[must_use]
    pub fn to_geocentric(&self, geo: Geographic, height: f64) -> DVec3 {
        let lat = geo.lat.to_radians();
        let lon = geo.lon.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let e2 = self.eccentricity_squared();
        let n = self.semi_major / (1.0 - e2 * sin_lat * sin_lat).sqrt();

        DVec3::new(
            (n + height) * cos_lat * cos_lon,
            (n + height) * cos_lat * sin_lon,
            (n * (1.0 - e2) + height) * sin_lat,
        )
    }

    /// Convert a geocentric Cartesian position (meters) back to geodetic
    /// coordinates and height above the ellipsoid.
    ///
    /// Uses the closed-form Bowring approximation, accurate to well below
    /// a millimeter for near-surface points.
    #[must_use]
    pub fn to_geodetic(&self, pos: DVec3) -> (Geographic, f64) {
        let p = pos.x.hypot(pos.y);
        let lon = pos.y.atan2(pos.x);

        if p == 0.0 {
            // On the polar axis; longitude is arbitrary.
            let lat = if pos.z >= 0.0 { 90.0 } else { -90.0 };
            return (Geographic::new(lat, 0.0), pos.z.abs() - self.semi_minor);
        }

        let e2 = self.eccentricity_squared();
        let ep2 = self.second_eccentricity_squared();

        let theta = (pos.z * self.semi_major).atan2(p * self.semi_minor);
        let (sin_theta, cos_theta) = theta.sin_cos();

        let lat = (pos.z + ep2 * self.semi_minor * sin_theta * sin_theta * sin_theta)
            .atan2(p - e2 * self.semi_major * cos_theta * cos_theta * cos_theta);

        let sin_lat = lat.sin();
        let n = self.semi_major / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let height = p / lat.cos() - n;

        (
            Geographic::new(lat.to_degrees(), lon.to_degrees()),
            height,
        )
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
