//! Configuration for the quadsphere tools.
//!
//! Runtime-configurable settings persisted as RON files, with named
//! fields, documented defaults, and CLI overrides via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, ProfileConfig, TerrainConfig};
pub use error::ConfigError;
