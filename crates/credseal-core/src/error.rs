//! Error types for Credseal core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps each kind
//! to an exit code and to the JSON failure document.

use thiserror::Error;

/// Result type alias for Credseal operations.
pub type Result<T> = std::result::Result<T, SealError>;

/// Core error type for Credseal operations.
#[derive(Debug, Error)]
pub enum SealError {
    /// Malformed input (bad JSON, bad blob framing, bad backup document)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Key derivation, randomness or block cipher failure
    #[error("Cipher failure: {0}")]
    CipherFailure(String),

    /// Text could not be represented in the expected byte encoding
    #[error("Encoding failure: {0}")]
    EncodingFailure(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SealError {
    /// Prefix the error message with the name of the field being processed,
    /// keeping the error kind intact.
    pub fn in_field(self, field: &str) -> Self {
        match self {
            SealError::InvalidInput(msg) => SealError::InvalidInput(format!("{}: {}", field, msg)),
            SealError::CipherFailure(msg) => {
                SealError::CipherFailure(format!("{}: {}", field, msg))
            }
            SealError::EncodingFailure(msg) => {
                SealError::EncodingFailure(format!("{}: {}", field, msg))
            }
            other => other,
        }
    }
}

impl From<serde_json::Error> for SealError {
    fn from(err: serde_json::Error) -> Self {
        SealError::InvalidInput(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for SealError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SealError::EncodingFailure(err.to_string())
    }
}
