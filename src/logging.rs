//! Diagnostic logging for the console programs.
//!
//! The library itself never installs a subscriber; a host embedding the
//! `cdylib` decides whether `tracing` events go anywhere.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Stdout is reserved for the greeting line. If a global subscriber is already
/// installed it is left in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!(error = %e, "keeping existing tracing subscriber");
    }
}
