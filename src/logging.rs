//! Diagnostic logging setup
//!
//! `RUST_LOG` takes precedence; otherwise only warnings are shown, or
//! everything down to debug with `--verbose`. Output goes to stderr so it never
//! mixes with command output.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
