//! Log setup for the binary. Library code only emits `tracing` events; this
//! is where they get a subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive, e.g. `shelf=trace`.
pub const LOG_ENV: &str = "SHELF_LOG";

/// `SHELF_LOG` wins, then `--verbose` (debug), then the configured level.
/// Output goes to stderr so it never mixes with rendered shelves.
pub fn init(verbose: bool, configured: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(configured)
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
