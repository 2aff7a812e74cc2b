//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use usercheck::constants::ENV_LOG;

/// Install the stderr log subscriber. Level comes from `USERCHECK_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
