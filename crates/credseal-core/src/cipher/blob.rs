//! Wire framing for sealed values.
//!
//! The string form is `base64(salt || iv || ciphertext)` using the standard
//! padded alphabet. Salt and IV are fixed width, so the layout is
//! self-describing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::padding::BLOCK_SIZE;
use crate::error::{Result, SealError};

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Initialization vector length in bytes.
pub const IV_LEN: usize = 16;

/// Length of the `salt || iv` prefix.
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN;

/// A parsed sealed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherBlob {
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    /// AES-256-CBC ciphertext; always a non-zero multiple of 16 bytes.
    pub ciphertext: Vec<u8>,
}

impl CipherBlob {
    /// Encode to the transportable base64 string.
    pub fn encode(&self) -> String {
        let mut raw = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        raw.extend_from_slice(&self.salt);
        raw.extend_from_slice(&self.iv);
        raw.extend_from_slice(&self.ciphertext);
        STANDARD.encode(raw)
    }

    /// Parse a base64 string produced by [`CipherBlob::encode`].
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `SealError::InvalidInput` if the text is not base64, is
    /// shorter than one salt, IV and cipher block, or the ciphertext is not
    /// block aligned.
    pub fn parse(encoded: &str) -> Result<Self> {
        let raw = STANDARD
            .decode(encoded.trim())
            .map_err(|e| SealError::InvalidInput(format!("Sealed value is not base64: {}", e)))?;

        if raw.len() < HEADER_LEN + BLOCK_SIZE {
            return Err(SealError::InvalidInput(format!(
                "Sealed value too short: {} bytes (need at least {})",
                raw.len(),
                HEADER_LEN + BLOCK_SIZE
            )));
        }

        let ciphertext = &raw[HEADER_LEN..];
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(SealError::InvalidInput(format!(
                "Ciphertext length {} is not a multiple of {}",
                ciphertext.len(),
                BLOCK_SIZE
            )));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&raw[..SALT_LEN]);
        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&raw[SALT_LEN..HEADER_LEN]);

        Ok(Self {
            salt,
            iv,
            ciphertext: ciphertext.to_vec(),
        })
    }
}
