use std::fs;

use credseal_core::backup::{recreation_commands, UserBackup, DEFAULT_PASSWORD_PLACEHOLDER};
use credseal_core::SealError;
use tempfile::tempdir;

const BACKUP: &str = r#"{
  "User": {
    "UserName": "alice",
    "Path": "/",
    "CreateDate": "2022-11-03T08:15:00+00:00",
    "UserId": "AIDAALICE",
    "Arn": "arn:aws:iam::123456789012:user/alice",
    "Tags": []
  },
  "InlinePolicies": [],
  "AttachedPolicies": [
    {"PolicyArn": "arn:aws:iam::aws:policy/PowerUserAccess", "PolicyName": "PowerUserAccess"}
  ],
  "Groups": ["developers"],
  "AccessKeys": [],
  "Tags": [],
  "LoginProfile": null,
  "MFADevices": [],
  "SigningCertificates": [],
  "SSHPublicKeys": [],
  "ServiceSpecificCredentials": [
    {"ServiceName": "codecommit.amazonaws.com", "ServiceUserName": "alice-at-123", "Status": "Active"}
  ],
  "BackupDate": "2024-02-01T12:00:00"
}"#;

#[test]
fn test_load_and_generate_commands() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("alice_backup.json");
    fs::write(&path, BACKUP).unwrap();

    let backup = UserBackup::load(&path).expect("load should succeed");
    let commands = recreation_commands(&backup, DEFAULT_PASSWORD_PLACEHOLDER);

    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], "aws iam create-user --user-name alice --path /");
    assert!(commands[1].contains("--group-name developers"));
    assert!(commands[2].contains("PowerUserAccess"));
    assert!(!commands.iter().any(|c| c.contains("create-login-profile")));
}

#[test]
fn test_save_then_load_preserves_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("normalised.json");

    let original = UserBackup::from_json(BACKUP).unwrap();
    original.save(&path).expect("save should succeed");

    let reloaded = UserBackup::load(&path).unwrap();
    assert_eq!(reloaded, original);
    assert_eq!(
        reloaded.service_specific_credentials[0]["ServiceUserName"],
        "alice-at-123"
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = UserBackup::load(&dir.path().join("missing.json")).unwrap_err();
    match err {
        SealError::Io { source } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_load_malformed_file_is_invalid_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        UserBackup::load(&path),
        Err(SealError::InvalidInput(_))
    ));
}
