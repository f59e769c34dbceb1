//! The cube tiling profile.

use quadsphere_geo::Extent;
use quadsphere_cube::{Face, face_extents, face_to_cube};

use crate::TileKey;

/// The tiling profile over the cube layout.
///
/// Entry point for the tiling layer: resolves which face owns a tile
/// key and enumerates the keys intersecting a geographic query extent,
/// decomposing multi-face queries per face first. Stateless and
/// shareable.
#[derive(Debug, Default, Clone, Copy)]
pub struct CubeProfile;

impl CubeProfile {
    /// Create the profile.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The profile's full extent in layout space.
    #[must_use]
    pub fn full_extent(&self) -> Extent {
        Extent::new(0.0, 0.0, 4.0, 3.0)
    }

    /// The face that fully contains the key's extent.
    ///
    /// # Panics
    ///
    /// A key over one of the six unused layout cells violates the
    /// single-face contract and panics; such keys cannot name real
    /// tiles. (Keys coarser than [`TileKey::FACE_LOD`] are not
    /// representable at all.)
    #[must_use]
    pub fn get_face(&self, key: &TileKey) -> Face {
        let shift = key.lod - TileKey::FACE_LOD;
        let cell_x = (key.x >> shift) as usize;
        let cell_y = key.y >> shift;
        match cell_y {
            0 => {
                assert!(cell_x == 0, "tile {key} lies in an unused south-row cell");
                Face::South
            }
            1 => Face::ALL[cell_x],
            2 => {
                assert!(cell_x == 0, "tile {key} lies in an unused north-row cell");
                Face::North
            }
            _ => unreachable!("key {key} exceeds the layout rows"),
        }
    }

    /// All tile keys at `lod` whose extents intersect the geographic
    /// query extent (degrees, longitude in \[−180, 180\]).
    ///
    /// Multi-face queries are decomposed into per-face pieces before
    /// enumeration and the results unioned; the full-globe extent at
    /// [`TileKey::FACE_LOD`] yields exactly one key per face. Levels
    /// coarser than `FACE_LOD` are clamped up to it, finer than
    /// [`TileKey::MAX_LOD`] down to it. Returns sorted, deduplicated
    /// keys; an invalid or off-globe extent yields none.
    #[must_use]
    pub fn get_intersecting_tiles(&self, extent: &Extent, lod: u32) -> Vec<TileKey> {
        let lod = lod.clamp(TileKey::FACE_LOD, TileKey::MAX_LOD);
        let size = TileKey::tile_size(lod);
        let per_cell = 1u32 << (lod - TileKey::FACE_LOD);

        let mut keys = Vec::new();
        for (face, rect) in face_extents(extent) {
            // Face rectangles are monotone under the affine cell map.
            let (xmin, ymin) = face_to_cube(rect.xmin, rect.ymin, face);
            let (xmax, ymax) = face_to_cube(rect.xmax, rect.ymax, face);

            let (ox, oy) = face.layout_origin();
            let cx0 = (ox / size) as u32;
            let cy0 = (oy / size) as u32;

            let mut x0 = ((xmin / size).floor() as u32).clamp(cx0, cx0 + per_cell - 1);
            let mut x1 = ((xmax / size).ceil() as u32).clamp(cx0 + 1, cx0 + per_cell);
            let mut y0 = ((ymin / size).floor() as u32).clamp(cy0, cy0 + per_cell - 1);
            let mut y1 = ((ymax / size).ceil() as u32).clamp(cy0 + 1, cy0 + per_cell);
            // Degenerate pieces on a tile boundary still touch one row
            // or column of tiles.
            if x1 <= x0 {
                x1 = x0 + 1;
            }
            if y1 <= y0 {
                y1 = y0 + 1;
            }

            for y in y0..y1 {
                for x in x0..x1 {
                    keys.push(TileKey::new(lod, x, y));
                }
            }
        }
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}
