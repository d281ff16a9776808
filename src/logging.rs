//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` (a `.env` file is honoured) and defaults to
/// `info`. Output goes to stderr. Calling this twice is harmless: the second
/// subscriber is simply not installed.
pub fn init_logging() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
