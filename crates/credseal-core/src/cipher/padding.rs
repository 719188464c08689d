//! Block padding.
//!
//! Every added byte holds the number of bytes added. A buffer whose length
//! is already block aligned still gets a full block of padding, because
//! the decrypting side always strips `last_byte` bytes.

use crate::error::{Result, SealError};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of padding bytes appended to a buffer of `len` bytes (1..=16).
pub fn padding_length(len: usize) -> usize {
    BLOCK_SIZE - (len % BLOCK_SIZE)
}

/// Pad `data` up to the next block boundary.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = padding_length(data.len());
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    // pad_len is at most 16, so the cast is lossless.
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strip the padding from a decrypted buffer.
///
/// # Errors
///
/// Returns `SealError::CipherFailure` when the buffer is not block aligned,
/// the trailing byte is outside `1..=16`, or the padding bytes disagree.
/// A wrong passphrase usually surfaces here.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(SealError::CipherFailure(format!(
            "Decrypted length {} is not a positive multiple of {}",
            data.len(),
            BLOCK_SIZE
        )));
    }

    let pad_len = data[data.len() - 1] as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE {
        return Err(SealError::CipherFailure(format!(
            "Invalid padding length {}",
            pad_len
        )));
    }

    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b as usize != pad_len) {
        return Err(SealError::CipherFailure(
            "Inconsistent padding bytes".to_string(),
        ));
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_length_range() {
        assert_eq!(padding_length(0), 16);
        assert_eq!(padding_length(1), 15);
        assert_eq!(padding_length(15), 1);
        assert_eq!(padding_length(16), 16);
        assert_eq!(padding_length(17), 15);
        assert_eq!(padding_length(32), 16);
    }

    #[test]
    fn test_pad_short_input() {
        let padded = pad(b"hunter2");
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[..7], b"hunter2");
        assert!(padded[7..].iter().all(|&b| b == 9));
    }

    #[test]
    fn test_pad_aligned_input_adds_full_block() {
        let data = [0x41u8; 16];
        let padded = pad(&data);
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn test_pad_empty_input() {
        assert_eq!(pad(b""), vec![16u8; 16]);
    }

    #[test]
    fn test_unpad_reverses_pad() {
        for len in 0..=48 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pad(&data);
            assert_eq!(unpad(&padded).unwrap(), data.as_slice());
        }
    }

    #[test]
    fn test_unpad_rejects_zero_length_byte() {
        let mut block = [3u8; 16];
        block[15] = 0;
        assert!(matches!(unpad(&block), Err(SealError::CipherFailure(_))));
    }

    #[test]
    fn test_unpad_rejects_oversized_length_byte() {
        let block = [17u8; 16];
        assert!(unpad(&block).is_err());
    }

    #[test]
    fn test_unpad_rejects_inconsistent_padding() {
        let mut block = [4u8; 16];
        block[13] = 9;
        assert!(unpad(&block)
            .unwrap_err()
            .to_string()
            .contains("Inconsistent padding"));
    }

    #[test]
    fn test_unpad_rejects_unaligned_input() {
        assert!(unpad(&[1u8; 15]).is_err());
        assert!(unpad(&[]).is_err());
    }
}
