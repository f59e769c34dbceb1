//! Configuration structs with documented defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain sampling settings.
    pub terrain: TerrainConfig,
    /// Tiling profile settings.
    pub profile: ProfileConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain sampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Feature attribute holding elevation values.
    pub elevation_attribute: String,
    /// Treat sampled elevations as offsets from existing terrain
    /// rather than absolute heights.
    pub offset_elevation: bool,
    /// Vertices per tile edge when generating tile meshes.
    pub grid_resolution: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            elevation_attribute: "ELEVATION".to_string(),
            offset_elevation: false,
            grid_resolution: 8,
        }
    }
}

/// Tiling profile configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    /// Level of detail used for tile queries.
    pub query_lod: u32,
    /// Geographic query extent as \[xmin, ymin, xmax, ymax\] degrees.
    pub extent: [f64; 4],
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            query_lod: 2,
            extent: [-180.0, -90.0, 180.0, 90.0],
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter override (e.g. "debug,quadsphere_tile=trace").
    /// Empty uses the built-in default.
    pub log_level: String,
}

impl Config {
    /// Load configuration from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&text).map_err(ConfigError::ParseError)
    }

    /// Save configuration to a RON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(ConfigError::SerializeError)?;
        std::fs::write(path, text).map_err(ConfigError::WriteError)
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or unreadable.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default config: {err}");
                Self::default()
            }
        }
    }
}
