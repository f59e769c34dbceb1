//! Tile addresses over the cube layout.

use quadsphere_geo::Extent;

/// Uniquely identifies a tile of the cube layout.
///
/// - `lod`: level of detail. [`Self::FACE_LOD`] is the coarsest valid
///   level, at which the grid is the 4×3 table of unit face cells (one
///   tile per face). Each finer level doubles the grid.
/// - `x`, `y`: grid coordinates at that LOD, x east across the layout,
///   y up from the south row.
///
/// Tiles are square in layout space, side `4 / 2^lod`. A key never
/// spans more than one face; levels coarser than `FACE_LOD` would, so
/// they are not representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey {
    /// Level of detail ([`Self::FACE_LOD`] = coarsest valid).
    pub lod: u32,
    /// Horizontal grid coordinate at this LOD.
    pub x: u32,
    /// Vertical grid coordinate at this LOD.
    pub y: u32,
}

impl TileKey {
    /// The level at which each face is exactly one tile.
    pub const FACE_LOD: u32 = 2;

    /// Maximum LOD; deep enough for sub-meter tiles while keeping the
    /// grid arithmetic exact in f64.
    pub const MAX_LOD: u32 = 26;

    /// Tiles along the x axis at the given LOD.
    ///
    /// # Panics
    ///
    /// Panics if `lod` is outside `FACE_LOD..=MAX_LOD`.
    #[must_use]
    pub fn tiles_wide(lod: u32) -> u32 {
        assert!(
            (Self::FACE_LOD..=Self::MAX_LOD).contains(&lod),
            "LOD {lod} outside {}..={}",
            Self::FACE_LOD,
            Self::MAX_LOD
        );
        1 << lod
    }

    /// Tiles along the y axis at the given LOD.
    ///
    /// # Panics
    ///
    /// Panics if `lod` is outside `FACE_LOD..=MAX_LOD`.
    #[must_use]
    pub fn tiles_high(lod: u32) -> u32 {
        3 * (Self::tiles_wide(lod) / 4)
    }

    /// Side length of a tile in layout units at the given LOD.
    #[must_use]
    pub fn tile_size(lod: u32) -> f64 {
        4.0 / f64::from(Self::tiles_wide(lod))
    }

    /// Construct a key, validating the grid bounds for its LOD.
    ///
    /// # Panics
    ///
    /// Panics if `lod` is out of range or `x`/`y` exceed the grid.
    #[must_use]
    pub fn new(lod: u32, x: u32, y: u32) -> Self {
        let wide = Self::tiles_wide(lod);
        let high = Self::tiles_high(lod);
        assert!(x < wide, "x={x} out of range for LOD {lod} (max {wide})");
        assert!(y < high, "y={y} out of range for LOD {lod} (max {high})");
        Self { lod, x, y }
    }

    /// The tile's extent in cube-layout space.
    #[must_use]
    pub fn extent(&self) -> Extent {
        let size = Self::tile_size(self.lod);
        Extent::new(
            f64::from(self.x) * size,
            f64::from(self.y) * size,
            f64::from(self.x + 1) * size,
            f64::from(self.y + 1) * size,
        )
    }

    /// The parent key at the next coarser LOD, or `None` at
    /// [`Self::FACE_LOD`].
    #[must_use]
    pub fn parent(&self) -> Option<TileKey> {
        if self.lod <= Self::FACE_LOD {
            return None;
        }
        Some(TileKey {
            lod: self.lod - 1,
            x: self.x / 2,
            y: self.y / 2,
        })
    }

    /// The four child keys at the next finer LOD, or `None` at
    /// [`Self::MAX_LOD`]. Order: south-west, south-east, north-west,
    /// north-east.
    #[must_use]
    pub fn children(&self) -> Option<[TileKey; 4]> {
        if self.lod >= Self::MAX_LOD {
            return None;
        }
        let lod = self.lod + 1;
        let cx = self.x * 2;
        let cy = self.y * 2;
        Some([
            TileKey::new(lod, cx, cy),
            TileKey::new(lod, cx + 1, cy),
            TileKey::new(lod, cx, cy + 1),
            TileKey::new(lod, cx + 1, cy + 1),
        ])
    }
}

impl std::fmt::Display for TileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(lod={}, x={}, y={})", self.lod, self.x, self.y)
    }
}
