//! Structured logging for the quadsphere tools.
//!
//! Console logging via the `tracing` ecosystem with environment-based
//! filtering (RUST_LOG wins) and a config-file override. The
//! subscriber's `log` bridge also surfaces the libraries' `log` macro
//! events.

use quadsphere_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Filter precedence: `RUST_LOG`, then the config's
/// `debug.log_level`, then "info". Safe to call more than once; later
/// calls are no-ops.
pub fn init_logging(config: Option<&Config>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(config));

    let console_layer = fmt::layer().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

fn configured_filter(config: Option<&Config>) -> EnvFilter {
    let directive = config
        .map(|config| config.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or("info");
    EnvFilter::new(directive)
}
