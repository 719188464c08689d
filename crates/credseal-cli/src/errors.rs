//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use credseal_core::SealError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Already written to stdout as a JSON failure document.
    Reported { message: String, code: i32 },

    /// Resource not found (backup document)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Reported { message, .. } => write!(f, "{}", message),
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a Reported error for a failure document that was already printed.
    pub fn reported(message: impl Into<String>, code: i32) -> Self {
        CliError::Reported {
            message: message.into(),
            code,
        }
    }

    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Reported { code, .. } => *code,
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

/// Exit code for a core error.
pub fn seal_exit_code(err: &SealError) -> i32 {
    match err {
        SealError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        SealError::CipherFailure(_) => exit_codes::CIPHER_FAILURE,
        SealError::EncodingFailure(_) => exit_codes::ENCODING_FAILURE,
        SealError::Io { .. } => exit_codes::GENERAL,
    }
}
