//! Axis-aligned extents, space-agnostic.

/// An axis-aligned bounding rectangle.
///
/// Used both for geographic extents (x = longitude, y = latitude, in
/// degrees) and for cube-layout or face-local extents. The extent does
/// not know which space it is in; callers do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Minimum x.
    pub xmin: f64,
    /// Minimum y.
    pub ymin: f64,
    /// Maximum x.
    pub xmax: f64,
    /// Maximum y.
    pub ymax: f64,
}

impl Extent {
    /// Construct an extent from its corners.
    #[must_use]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// The full-globe geographic extent.
    pub const FULL_GLOBE: Extent = Extent {
        xmin: -180.0,
        ymin: -90.0,
        xmax: 180.0,
        ymax: 90.0,
    };

    /// True when all corners are finite and min ≤ max on both axes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.xmin.is_finite()
            && self.ymin.is_finite()
            && self.xmax.is_finite()
            && self.ymax.is_finite()
            && self.xmin <= self.xmax
            && self.ymin <= self.ymax
    }

    /// Width of the extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Height of the extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Center point of the extent.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        ((self.xmin + self.xmax) * 0.5, (self.ymin + self.ymax) * 0.5)
    }

    /// True when the point lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }

    /// True when `other` lies entirely inside or on the boundary.
    #[must_use]
    pub fn contains_extent(&self, other: &Extent) -> bool {
        other.xmin >= self.xmin
            && other.xmax <= self.xmax
            && other.ymin >= self.ymin
            && other.ymax <= self.ymax
    }

    /// True when the two extents overlap with positive area.
    #[must_use]
    pub fn overlaps(&self, other: &Extent) -> bool {
        self.xmin < other.xmax
            && other.xmin < self.xmax
            && self.ymin < other.ymax
            && other.ymin < self.ymax
    }

    /// The overlapping region of two extents, or `None` when they are
    /// disjoint. Boundary-touching extents yield a degenerate
    /// (zero-width or zero-height) extent.
    #[must_use]
    pub fn intersection(&self, other: &Extent) -> Option<Extent> {
        let xmin = self.xmin.max(other.xmin);
        let ymin = self.ymin.max(other.ymin);
        let xmax = self.xmax.min(other.xmax);
        let ymax = self.ymax.min(other.ymax);
        if xmin <= xmax && ymin <= ymax {
            Some(Extent::new(xmin, ymin, xmax, ymax))
        } else {
            None
        }
    }

    /// The smallest extent containing both inputs.
    #[must_use]
    pub fn union(&self, other: &Extent) -> Extent {
        Extent::new(
            self.xmin.min(other.xmin),
            self.ymin.min(other.ymin),
            self.xmax.max(other.xmax),
            self.ymax.max(other.ymax),
        )
    }

    /// Grow the extent to include the point.
    pub fn expand_to(&mut self, x: f64, y: f64) {
        self.xmin = self.xmin.min(x);
        self.ymin = self.ymin.min(y);
        self.xmax = self.xmax.max(x);
        self.ymax = self.ymax.max(y);
    }

    /// An inverted empty extent, suitable as the seed for
    /// [`Self::expand_to`] accumulation. Not valid until expanded.
    #[must_use]
    pub fn empty() -> Extent {
        Extent::new(f64::MAX, f64::MAX, f64::MIN, f64::MIN)
    }
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let e = Extent::new(-2.0, 1.0, 3.0, 4.0);
        assert_eq!(e.width(), 5.0);
        assert_eq!(e.height(), 3.0);
        assert_eq!(e.center(), (0.5, 2.5));
        assert!(e.is_valid());
    }

    #[test]
    fn test_inverted_extent_is_invalid() {
        assert!(!Extent::new(1.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Extent::new(0.0, f64::NAN, 1.0, 1.0).is_valid());
        assert!(!Extent::empty().is_valid());
    }

    #[test]
    fn test_contains_point_includes_boundary() {
        let e = Extent::new(0.0, 0.0, 1.0, 1.0);
        assert!(e.contains(0.0, 0.0));
        assert!(e.contains(1.0, 1.0));
        assert!(e.contains(0.5, 0.5));
        assert!(!e.contains(1.0 + 1e-12, 0.5));
    }

    #[test]
    fn test_contains_extent() {
        let outer = Extent::new(0.0, 1.0, 1.0, 2.0);
        assert!(outer.contains_extent(&Extent::new(0.25, 1.25, 0.75, 1.75)));
        assert!(outer.contains_extent(&outer));
        assert!(!outer.contains_extent(&Extent::new(0.5, 1.5, 1.5, 1.75)));
    }

    #[test]
    fn test_overlap_requires_positive_area() {
        let a = Extent::new(0.0, 0.0, 1.0, 1.0);
        let b = Extent::new(1.0, 0.0, 2.0, 1.0);
        // Shared edge only.
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Extent::new(0.9, 0.9, 2.0, 2.0)));
    }

    #[test]
    fn test_intersection() {
        let a = Extent::new(0.0, 0.0, 2.0, 2.0);
        let b = Extent::new(1.0, 1.0, 3.0, 3.0);
        assert_eq!(a.intersection(&b), Some(Extent::new(1.0, 1.0, 2.0, 2.0)));

        let edge = Extent::new(2.0, 0.0, 3.0, 2.0);
        let touch = a.intersection(&edge).unwrap();
        assert_eq!(touch.width(), 0.0);

        assert_eq!(a.intersection(&Extent::new(5.0, 5.0, 6.0, 6.0)), None);
    }

    #[test]
    fn test_union_and_expand() {
        let a = Extent::new(0.0, 0.0, 1.0, 1.0);
        let b = Extent::new(2.0, -1.0, 3.0, 0.5);
        assert_eq!(a.union(&b), Extent::new(0.0, -1.0, 3.0, 1.0));

        let mut acc = Extent::empty();
        acc.expand_to(1.0, 2.0);
        acc.expand_to(-1.0, 0.0);
        assert_eq!(acc, Extent::new(-1.0, 0.0, 1.0, 2.0));
        assert!(acc.is_valid());
    }

    #[test]
    fn test_full_globe() {
        assert_eq!(Extent::FULL_GLOBE.width(), 360.0);
        assert_eq!(Extent::FULL_GLOBE.height(), 180.0);
    }
}
