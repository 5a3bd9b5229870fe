//! Logging configuration and initialization.
//!
//! Uses tracing with environment-based filtering.

use std::io::IsTerminal;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize logging for the service.
///
/// Honors `RUST_LOG` if set; otherwise a default filter is derived from
/// the verbosity and quiet flags.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
pub fn init_logging(verbosity: u8, quiet: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbosity, quiet)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn default_filter(verbosity: u8, quiet: bool) -> String {
    if quiet {
        return "error".to_string();
    }

    match verbosity {
        0 => "trackd=info,tower_http=info".to_string(),
        1 => "trackd=debug,tracker_lib=debug,tower_http=debug".to_string(),
        _ => "trackd=trace,tracker_lib=trace,tower_http=trace".to_string(),
    }
}
