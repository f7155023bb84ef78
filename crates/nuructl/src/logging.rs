//! Diagnostic logging for nuructl
//!
//! Logs go to stderr so they never mix with command output. `NURU_LOG`
//! takes an `EnvFilter` directive; `--verbose` raises the default to debug.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "NURU_LOG";

/// Default filter when `NURU_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "nuructl=debug,nuru_common=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
