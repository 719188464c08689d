//! Application context for the Credseal CLI.
//!
//! Combines CLI arguments with lazily-loaded configuration.

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{load_config, CredsealConfig};
use crate::constants::DEFAULT_LOG_LEVEL;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<CredsealConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&CredsealConfig> {
        self.config
            .get_or_try_init(|| load_config(self.cli.config.as_deref()))
    }

    /// Log level from config, falling back to the default when the config
    /// cannot be loaded. Config errors surface later through `config()`.
    pub fn log_level(&self) -> String {
        self.config()
            .map(|config| config.logging.level.clone())
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    }
}
