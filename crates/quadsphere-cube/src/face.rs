//! The six faces of the projection and their orientation bases.

use glam::DVec3;

use quadsphere_geo::Geographic;

/// One of the six faces of the cube projection.
///
/// Face 0 is centered on geographic (0°, 0°); faces 1–3 are the
/// remaining equatorial faces progressing eastward; face 4 caps the
/// North Pole and face 5 the South Pole. The discriminants are the
/// face indices used for deterministic tie-breaking (lowest wins).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    /// Equatorial face centered at longitude 0°.
    Equator0 = 0,
    /// Equatorial face centered at longitude 90°E.
    Equator90 = 1,
    /// Equatorial face centered at longitude 180°.
    Equator180 = 2,
    /// Equatorial face centered at longitude 90°W.
    Equator270 = 3,
    /// North Pole cap.
    North = 4,
    /// South Pole cap.
    South = 5,
}

impl Face {
    /// All six faces in index order.
    pub const ALL: [Face; 6] = [
        Face::Equator0,
        Face::Equator90,
        Face::Equator180,
        Face::Equator270,
        Face::North,
        Face::South,
    ];

    /// The face index, 0–5.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face for an index, or `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Face> {
        Face::ALL.get(index).copied()
    }

    /// Unit vector from the sphere center through this face's center,
    /// in the geocentric frame (+X toward (0°, 0°), +Z toward the North
    /// Pole).
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            Face::Equator0 => DVec3::X,
            Face::Equator90 => DVec3::Y,
            Face::Equator180 => DVec3::NEG_X,
            Face::Equator270 => DVec3::NEG_Y,
            Face::North => DVec3::Z,
            Face::South => DVec3::NEG_Z,
        }
    }

    /// Tangent axis: direction of increasing face x at the face center.
    /// Eastward on the equatorial faces.
    #[must_use]
    pub fn tangent(self) -> DVec3 {
        match self {
            Face::Equator0 => DVec3::Y,
            Face::Equator90 => DVec3::NEG_X,
            Face::Equator180 => DVec3::NEG_Y,
            Face::Equator270 => DVec3::X,
            Face::North => DVec3::Y,
            Face::South => DVec3::Y,
        }
    }

    /// Bitangent axis: direction of increasing face y at the face
    /// center. Northward on the equatorial faces. The polar bases are
    /// chosen so the layout seams above and below face 0 share the same
    /// x parameterization.
    #[must_use]
    pub fn bitangent(self) -> DVec3 {
        match self {
            Face::Equator0 | Face::Equator90 | Face::Equator180 | Face::Equator270 => DVec3::Z,
            Face::North => DVec3::NEG_X,
            Face::South => DVec3::X,
        }
    }

    /// Geographic center of the face.
    #[must_use]
    pub fn center(self) -> Geographic {
        match self {
            Face::Equator0 => Geographic::new(0.0, 0.0),
            Face::Equator90 => Geographic::new(0.0, 90.0),
            Face::Equator180 => Geographic::new(0.0, 180.0),
            Face::Equator270 => Geographic::new(0.0, -90.0),
            Face::North => Geographic::new(90.0, 0.0),
            Face::South => Geographic::new(-90.0, 0.0),
        }
    }

    /// Minimum corner of this face's unit cell in the flattened
    /// [0,4]×[0,3] layout space.
    #[must_use]
    pub fn layout_origin(self) -> (f64, f64) {
        match self {
            Face::Equator0 => (0.0, 1.0),
            Face::Equator90 => (1.0, 1.0),
            Face::Equator180 => (2.0, 1.0),
            Face::Equator270 => (3.0, 1.0),
            Face::North => (0.0, 2.0),
            Face::South => (0.0, 0.0),
        }
    }

    /// True for the four equatorial faces.
    #[must_use]
    pub fn is_equatorial(self) -> bool {
        matches!(
            self,
            Face::Equator0 | Face::Equator90 | Face::Equator180 | Face::Equator270
        )
    }
}
