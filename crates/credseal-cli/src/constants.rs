//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (config, I/O, unclassified)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unclassified failure.
    pub const GENERAL: i32 = 1;

    /// Backup document not found.
    pub const NOT_FOUND: i32 = 3;

    /// Malformed request, sealed value or backup document.
    pub const INVALID_INPUT: i32 = 4;

    /// Key derivation, randomness or block cipher failure.
    pub const CIPHER_FAILURE: i32 = 5;

    /// Input or recovered text is not UTF-8.
    pub const ENCODING_FAILURE: i32 = 6;
}

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CREDSEAL_LOG";

/// Log level used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
