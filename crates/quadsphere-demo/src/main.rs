//! Demo binary exercising the cube projection, tile queries, and
//! per-tile locators.
//!
//! Configuration is loaded from a RON file when `--config` is given and
//! can be overridden via CLI flags, e.g.
//! `cargo run -p quadsphere-demo -- --lod 4 --extent -45 -45 45 45`.

mod demos;

use clap::Parser;
use quadsphere_config::{CliArgs, Config};
use tracing::info;

fn main() {
    let args = CliArgs::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    quadsphere_log::init_logging(Some(&config));
    info!("quadsphere demo starting");

    demos::demonstrate_projection_coverage();
    demos::demonstrate_roundtrip_accuracy();
    demos::demonstrate_reprojection();
    demos::demonstrate_tile_query(&config);
    demos::demonstrate_locator(&config);

    info!("quadsphere demo finished");
}
