//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! The parameters are part of the wire contract with external decryptors
//! and must not change.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{Result, SealError};

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 1000;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// Minimum accepted salt length in bytes.
const MIN_SALT_LENGTH: usize = 16;

/// A cryptographic key derived from a passphrase.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a 32-byte key from a passphrase and salt.
///
/// Same passphrase + salt always produces the same key. The output is the
/// raw PBKDF2 key material; it is not hashed again.
///
/// # Examples
///
/// ```
/// use credseal_core::cipher::derive_key;
///
/// let salt = [7u8; 16];
/// let key = derive_key("my-passphrase", &salt).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(passphrase: &str, salt: &[u8]) -> Result<DerivedKey> {
    derive_key_with_iterations(passphrase, salt, PBKDF2_ITERATIONS)
}

pub(crate) fn derive_key_with_iterations(
    passphrase: &str,
    salt: &[u8],
    iterations: u32,
) -> Result<DerivedKey> {
    if passphrase.is_empty() {
        return Err(SealError::InvalidInput(
            "Passphrase cannot be empty".to_string(),
        ));
    }

    if salt.len() < MIN_SALT_LENGTH {
        return Err(SealError::InvalidInput(format!(
            "Salt must be at least {} bytes",
            MIN_SALT_LENGTH
        )));
    }

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, iterations, &mut key_bytes);

    Ok(DerivedKey::from_bytes(key_bytes))
}
