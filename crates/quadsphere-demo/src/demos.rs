//! Demonstration routines reporting through `tracing`.

use std::collections::HashMap;

use glam::DVec3;
use quadsphere_config::Config;
use quadsphere_geo::Extent;
use quadsphere_cube::{Face, FaceCoord, face_to_direction, lat_lon_to_face_coords};
use quadsphere_srs::{SpatialReference, SrsRegistry};
use quadsphere_tile::{CubeProfile, FaceLocator, TileKey};
use tracing::{info, warn};

/// Projects a grid over every face and reports how far the results
/// stray from the unit sphere.
pub(crate) fn demonstrate_projection_coverage() {
    let subdivisions = 16;
    let mut total_points = 0u32;
    let mut max_deviation: f64 = 0.0;

    for face in Face::ALL {
        for xs in 0..=subdivisions {
            for ys in 0..=subdivisions {
                let x = -1.0 + 2.0 * xs as f64 / subdivisions as f64;
                let y = -1.0 + 2.0 * ys as f64 / subdivisions as f64;
                let dir = face_to_direction(&FaceCoord::new(face, x, y));
                max_deviation = max_deviation.max((dir.length() - 1.0).abs());
                total_points += 1;
            }
        }
    }

    info!(
        "projected {} face grid points onto the sphere (max radius deviation {:.2e})",
        total_points, max_deviation
    );
}

/// Sweeps a geographic grid through the forward and inverse projection
/// and reports the worst round-trip error.
pub(crate) fn demonstrate_roundtrip_accuracy() {
    let mut max_error: f64 = 0.0;
    let mut face_counts: HashMap<Face, u32> = HashMap::new();

    for lat_step in 0..=35 {
        for lon_step in 0..72 {
            let lat = -87.5 + 5.0 * lat_step as f64;
            let lon = -180.0 + 5.0 * lon_step as f64;
            let Ok(fc) = lat_lon_to_face_coords(lat, lon, None) else {
                warn!("no face for ({lat}, {lon})");
                continue;
            };
            *face_counts.entry(fc.face).or_insert(0) += 1;

            let expected = quadsphere_geo::Geographic::new(lat, lon).to_unit_vector();
            let error = (face_to_direction(&fc) - expected).length();
            max_error = max_error.max(error);
        }
    }

    info!("round-trip max direction error {:.2e}", max_error);
    for face in Face::ALL {
        info!(
            "  {:?}: {} grid points",
            face,
            face_counts.get(&face).copied().unwrap_or(0)
        );
    }
}

/// Runs a point through the registry's references, direct path and
/// generic pipeline.
pub(crate) fn demonstrate_reprojection() {
    let registry = SrsRegistry::with_defaults();
    let Some(cube) = registry.get("unified-cube") else {
        warn!("cube spatial reference missing from registry");
        return;
    };
    let Some(projected) = registry.get("plate-carree") else {
        warn!("projected spatial reference missing from registry");
        return;
    };

    // Center of face 1 through the direct path to geographic.
    match cube.pre_transform(1.5, 1.5) {
        Ok((lon, lat)) => info!("cube (1.5, 1.5) -> geographic ({lon:.3}, {lat:.3})"),
        Err(err) => warn!("cube pre-transform failed: {err}"),
    }

    // The same point to projected meters needs the generic pipeline.
    match cube.transform_with_fallback(1.5, 1.5, projected.as_ref()) {
        Ok((x, y)) => info!("cube (1.5, 1.5) -> plate-carree ({x:.1} m, {y:.1} m)"),
        Err(err) => warn!("fallback reprojection failed: {err}"),
    }
}

/// Queries the profile with the configured extent and LOD and reports
/// the per-face tile breakdown.
pub(crate) fn demonstrate_tile_query(config: &Config) {
    let [xmin, ymin, xmax, ymax] = config.profile.extent;
    let extent = Extent::new(xmin, ymin, xmax, ymax);
    let profile = CubeProfile::new();

    let keys = profile.get_intersecting_tiles(&extent, config.profile.query_lod);
    info!(
        "extent {extent} at LOD {} intersects {} tiles",
        config.profile.query_lod,
        keys.len()
    );

    let mut per_face: HashMap<Face, u32> = HashMap::new();
    for key in &keys {
        *per_face.entry(profile.get_face(key)).or_insert(0) += 1;
    }
    for face in Face::ALL {
        if let Some(count) = per_face.get(&face) {
            info!("  {face:?}: {count} tiles");
        }
    }
}

/// Generates one tile's mesh grid through its locator and reports the
/// worst local round-trip error.
pub(crate) fn demonstrate_locator(config: &Config) {
    let profile = CubeProfile::new();
    let key = TileKey::new(TileKey::FACE_LOD, 1, 1);
    let locator = FaceLocator::for_tile(&key, &profile);
    info!(
        "building a {}x{} grid for tile {} on {:?} (elevation attribute '{}')",
        config.terrain.grid_resolution + 1,
        config.terrain.grid_resolution + 1,
        key,
        locator.face(),
        config.terrain.elevation_attribute
    );

    let resolution = config.terrain.grid_resolution.max(1);
    let mut max_error: f64 = 0.0;
    for row in 0..=resolution {
        for col in 0..=resolution {
            let local = DVec3::new(
                col as f64 / resolution as f64,
                row as f64 / resolution as f64,
                0.0,
            );
            let model = match locator.convert_local_to_model(local) {
                Ok(model) => model,
                Err(err) => {
                    warn!("local {local} failed: {err}");
                    continue;
                }
            };
            match locator.convert_model_to_local(model) {
                Ok(back) => max_error = max_error.max((back - local).length()),
                Err(err) => warn!("model {model} failed: {err}"),
            }
        }
    }
    info!("locator round-trip max error {:.2e}", max_error);
}
