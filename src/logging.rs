//! Console logging for the command line tools.

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber on stderr, filtered by `RUST_LOG` (default
/// `info`), so stdout stays free for results.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
