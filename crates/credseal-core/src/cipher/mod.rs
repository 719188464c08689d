//! Password sealing compatible with `PBEWithSHA256And256BitAES-CBC`.
//!
//! ## Construction
//!
//! - Fresh 16-byte salt and 16-byte IV from the OS random source per call
//! - PBKDF2-HMAC-SHA256, 1000 iterations, 32-byte key
//! - UTF-8 plaintext padded to a 16-byte boundary (see [`padding`])
//! - AES-256-CBC with no library-level padding
//! - Output: `base64(salt || iv || ciphertext)` (see [`blob`])
//!
//! Every parameter is fixed by the external decryptors that consume these
//! values. Sealing is non-deterministic: the same input sealed twice yields
//! different strings.
//!
//! A blank passphrase (empty or whitespace only) disables sealing and the
//! plaintext passes through unchanged.

pub mod blob;
pub mod key;
pub mod padding;

use aes::cipher::block_padding::NoPadding;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use zeroize::Zeroizing;

use crate::error::{Result, SealError};

pub use blob::{CipherBlob, IV_LEN, SALT_LEN};
pub use key::{derive_key, DerivedKey};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Whether a passphrase means "do not encrypt".
pub fn is_blank(passphrase: &str) -> bool {
    passphrase.trim().is_empty()
}

/// Seal a password under a passphrase.
///
/// Returns the plaintext unchanged when the passphrase is blank.
///
/// # Errors
///
/// Returns `SealError::CipherFailure` if the OS random source is
/// unavailable or the cipher cannot be initialised.
///
/// # Examples
///
/// ```
/// use credseal_core::cipher::{decrypt, encrypt};
///
/// let sealed = encrypt("hunter2", "k1").unwrap();
/// assert_ne!(sealed, "hunter2");
/// assert_eq!(decrypt(&sealed, "k1").unwrap(), "hunter2");
///
/// assert_eq!(encrypt("hunter2", "   ").unwrap(), "hunter2");
/// ```
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    if is_blank(passphrase) {
        return Ok(plaintext.to_string());
    }

    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    fill_random(&mut salt)?;
    fill_random(&mut iv)?;

    seal_with(plaintext, passphrase, salt, iv)
}

/// Seal with a caller-supplied salt and IV.
///
/// This is the deterministic half of [`encrypt`]. It does not apply the
/// blank-passphrase passthrough. Never reuse a salt/IV pair outside tests.
///
/// # Errors
///
/// Returns `SealError::InvalidInput` for an empty passphrase and
/// `SealError::CipherFailure` if the cipher cannot be initialised.
pub fn seal_with(
    plaintext: &str,
    passphrase: &str,
    salt: [u8; SALT_LEN],
    iv: [u8; IV_LEN],
) -> Result<String> {
    let key = derive_key(passphrase, &salt)?;

    let mut buf = Zeroizing::new(padding::pad(plaintext.as_bytes()));
    let len = buf.len();
    let ciphertext = Aes256CbcEnc::new_from_slices(key.as_bytes(), &iv)
        .map_err(|_| SealError::CipherFailure("Invalid AES-256-CBC key or IV length".to_string()))?
        .encrypt_padded_mut::<NoPadding>(&mut buf, len)
        .map_err(|_| SealError::CipherFailure("Block encryption failed".to_string()))?
        .to_vec();

    tracing::debug!(ciphertext_bytes = ciphertext.len(), "sealed value");

    Ok(CipherBlob {
        salt,
        iv,
        ciphertext,
    }
    .encode())
}

/// Recover the plaintext from a sealed value.
///
/// Returns the input unchanged when the passphrase is blank, mirroring
/// [`encrypt`].
///
/// # Errors
///
/// - `SealError::InvalidInput` if the value is not a well-formed sealed value
/// - `SealError::CipherFailure` if the padding is invalid (usually a wrong
///   passphrase)
/// - `SealError::EncodingFailure` if the recovered bytes are not UTF-8
///
/// CBC carries no authentication tag, so a wrong passphrase can, rarely,
/// yield valid-looking padding and garbage text.
pub fn decrypt(sealed: &str, passphrase: &str) -> Result<String> {
    if is_blank(passphrase) {
        return Ok(sealed.to_string());
    }

    let blob = CipherBlob::parse(sealed)?;
    let key = derive_key(passphrase, &blob.salt)?;

    let mut buf = Zeroizing::new(blob.ciphertext);
    let decrypted = Aes256CbcDec::new_from_slices(key.as_bytes(), &blob.iv)
        .map_err(|_| SealError::CipherFailure("Invalid AES-256-CBC key or IV length".to_string()))?
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_| SealError::CipherFailure("Block decryption failed".to_string()))?;

    let body = padding::unpad(decrypted)?;
    let text = std::str::from_utf8(body).map_err(|e| {
        SealError::EncodingFailure(format!("Decrypted value is not UTF-8: {}", e))
    })?;
    Ok(text.to_string())
}

fn fill_random(buf: &mut [u8]) -> Result<()> {
    getrandom::getrandom(buf)
        .map_err(|e| SealError::CipherFailure(format!("Secure random source unavailable: {}", e)))
}
