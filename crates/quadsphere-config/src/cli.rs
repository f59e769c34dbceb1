//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Quadsphere command-line arguments.
///
/// CLI values override settings loaded from the config file.
#[derive(Parser, Debug, Default)]
#[command(name = "quadsphere", about = "Quadsphere tiling tools")]
pub struct CliArgs {
    /// Level of detail for tile queries.
    #[arg(long)]
    pub lod: Option<u32>,

    /// Geographic query extent: xmin ymin xmax ymax (degrees).
    #[arg(long, num_args = 4, value_names = ["XMIN", "YMIN", "XMAX", "YMAX"], allow_negative_numbers = true)]
    pub extent: Option<Vec<f64>>,

    /// Vertices per tile edge for mesh generation.
    #[arg(long)]
    pub grid_resolution: Option<u32>,

    /// Log filter (error, warn, info, debug, trace, or a full directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to the config file (overrides the default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(lod) = args.lod {
            self.profile.query_lod = lod;
        }
        if let Some(extent) = &args.extent {
            if extent.len() == 4 {
                self.profile.extent = [extent[0], extent[1], extent[2], extent[3]];
            }
        }
        if let Some(resolution) = args.grid_resolution {
            self.terrain.grid_resolution = resolution;
        }
        if let Some(level) = &args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let mut config = Config::default();
        let args = CliArgs {
            lod: Some(6),
            extent: Some(vec![-10.0, -10.0, 10.0, 10.0]),
            grid_resolution: Some(16),
            log_level: Some("trace".to_string()),
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.profile.query_lod, 6);
        assert_eq!(config.profile.extent, [-10.0, -10.0, 10.0, 10.0]);
        assert_eq!(config.terrain.grid_resolution, 16);
        assert_eq!(config.debug.log_level, "trace");
    }

    #[test]
    fn test_absent_args_leave_config_untouched() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = CliArgs::parse_from([
            "quadsphere",
            "--lod",
            "4",
            "--extent",
            "-45",
            "-45",
            "45",
            "45",
        ]);
        assert_eq!(args.lod, Some(4));
        assert_eq!(args.extent, Some(vec![-45.0, -45.0, 45.0, 45.0]));
    }
}
