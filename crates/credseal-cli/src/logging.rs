//! Tracing subscriber setup.
//!
//! Logs go to stderr: stdout carries exactly one JSON document for the
//! password commands.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Install the global subscriber.
///
/// `CREDSEAL_LOG` takes precedence over `level`.
///
/// # Errors
///
/// Returns an error if a subscriber has already been set.
pub fn init(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}
