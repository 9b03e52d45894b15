//! Diagnostics for the seeder. Operator lines (`[OK]`, `[SKIP]`, summaries)
//! are printed to stdout by the callers; tracing output goes to stderr.

use tracing_subscriber::{EnvFilter, fmt::SubscriberBuilder};

use crate::util::env::init_env;

/// `RUST_LOG` if set, including a value that only lives in `.env`;
/// otherwise `default_filter`.
pub fn resolve_filter(default_filter: &str) -> EnvFilter {
    init_env();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Installs the global fmt subscriber. Fails if one is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), anyhow::Error> {
    SubscriberBuilder::default()
        .with_env_filter(resolve_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}
