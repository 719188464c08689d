use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use credseal_core::cipher::{decrypt, encrypt};
use credseal_core::{FieldRequest, SealError};

const PASSPHRASE: &str = "test-passphrase-secure-123";

#[test]
fn test_round_trip_across_lengths() {
    for len in 0..=40 {
        let plaintext: String = "x".repeat(len);
        let sealed = encrypt(&plaintext, PASSPHRASE).expect("encryption should succeed");
        let recovered = decrypt(&sealed, PASSPHRASE).expect("decryption should succeed");
        assert_eq!(recovered, plaintext, "length {}", len);
    }
}

#[test]
fn test_padding_boundaries_round_trip() {
    for len in [0usize, 16, 32] {
        let plaintext = "a".repeat(len);
        let sealed = encrypt(&plaintext, PASSPHRASE).expect("encryption should succeed");
        let raw = STANDARD.decode(&sealed).expect("sealed value should be base64");

        // Aligned input always gains a full padding block.
        assert_eq!(raw.len(), 32 + len + 16);
        assert_eq!(decrypt(&sealed, PASSPHRASE).unwrap(), plaintext);
    }
}

#[test]
fn test_framing_invariant() {
    for plaintext in ["", "a", "hunter2", "exactly-16-bytes", "pässwörd with ünïcode €"] {
        let sealed = encrypt(plaintext, PASSPHRASE).unwrap();
        let raw = STANDARD.decode(&sealed).unwrap();
        assert!(raw.len() >= 32);
        assert_eq!((raw.len() - 32) % 16, 0);
    }
}

#[test]
fn test_non_determinism() {
    let first = encrypt("hunter2", PASSPHRASE).unwrap();
    let second = encrypt("hunter2", PASSPHRASE).unwrap();
    assert_ne!(first, second);

    let first_raw = STANDARD.decode(&first).unwrap();
    let second_raw = STANDARD.decode(&second).unwrap();
    assert_ne!(&first_raw[..16], &second_raw[..16], "salt must be fresh");
    assert_ne!(&first_raw[16..32], &second_raw[16..32], "iv must be fresh");
}

#[test]
fn test_sealed_value_does_not_contain_plaintext() {
    let sealed = encrypt("PLAINTEXT_MARKER_123", PASSPHRASE).unwrap();
    assert!(!sealed.contains("PLAINTEXT_MARKER_123"));
    let raw = STANDARD.decode(&sealed).unwrap();
    assert!(!String::from_utf8_lossy(&raw).contains("PLAINTEXT_MARKER_123"));
}

#[test]
fn test_passphrase_with_surrounding_whitespace_is_used_verbatim() {
    let sealed = encrypt("hunter2", " k1 ").unwrap();
    assert_eq!(decrypt(&sealed, " k1 ").unwrap(), "hunter2");
    match decrypt(&sealed, "k1") {
        Ok(text) => assert_ne!(text, "hunter2"),
        Err(err) => assert!(matches!(
            err,
            SealError::CipherFailure(_) | SealError::EncodingFailure(_)
        )),
    }
}

#[test]
fn test_request_seal_then_unseal() {
    let request = FieldRequest::from_json(
        r#"{
            "encryption_key": "k1",
            "service_password": "svc-secret",
            "keystore_password": "changeit",
            "db_password": "p@ss",
            "rabbitmq_password": "guest",
            "keystone_password": "admin"
        }"#,
    )
    .unwrap();

    let sealed = request.encrypt().unwrap();
    assert_ne!(sealed, request.fields);

    let recovered = sealed.decrypt_all("k1").unwrap();
    assert_eq!(recovered, request.fields);
}
