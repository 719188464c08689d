//! IAM user backup documents.
//!
//! The document shape (PascalCase keys) is shared with the tool that
//! extracts users from the cloud API, so it must round-trip unchanged,
//! including the key order of policy documents.
//! Timestamps stay as the ISO-8601 strings the extractor wrote.
//!
//! From a backup this module generates the `aws iam` commands that
//! recreate the user's path, groups, policies, tags and console login.
//! Credentials (access keys, MFA devices, certificates, SSH keys,
//! service-specific credentials) cannot be recreated from metadata and are
//! listed as manual follow-ups instead.
//!
//! Command arguments are shell-quoted wherever they are not plain words,
//! so the output can be pasted into a POSIX shell as-is.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SealError};
use crate::fs::write_atomic;

/// Default placeholder for the console password in `create-login-profile`.
pub const DEFAULT_PASSWORD_PLACEHOLDER: &str = "<NEW_PASSWORD>";

/// Trailing note printed after the recreation commands.
pub const MANUAL_FOLLOWUP_NOTE: &str =
    "# Note: Access keys, MFA devices, and certificates must be recreated manually";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserBackup {
    pub user: UserRecord,
    #[serde(default)]
    pub inline_policies: Vec<InlinePolicy>,
    #[serde(default)]
    pub attached_policies: Vec<AttachedPolicy>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub access_keys: Vec<AccessKey>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub login_profile: Option<LoginProfile>,
    #[serde(rename = "MFADevices", default)]
    pub mfa_devices: Vec<MfaDevice>,
    #[serde(default)]
    pub signing_certificates: Vec<SigningCertificate>,
    #[serde(rename = "SSHPublicKeys", default)]
    pub ssh_public_keys: Vec<SshPublicKey>,
    /// Passed through untouched; the extractor stores the raw API records.
    #[serde(default)]
    pub service_specific_credentials: Vec<serde_json::Value>,
    #[serde(default)]
    pub backup_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    pub user_name: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub create_date: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub arn: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InlinePolicy {
    pub policy_name: String,
    pub policy_document: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachedPolicy {
    pub policy_arn: String,
    #[serde(default)]
    pub policy_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessKey {
    pub access_key_id: String,
    pub status: String,
    #[serde(default)]
    pub create_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginProfile {
    #[serde(default)]
    pub create_date: String,
    #[serde(default)]
    pub password_reset_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MfaDevice {
    pub serial_number: String,
    #[serde(default)]
    pub enable_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SigningCertificate {
    pub certificate_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshPublicKey {
    #[serde(rename = "SSHPublicKeyId")]
    pub ssh_public_key_id: String,
    #[serde(rename = "Status")]
    pub status: String,
}

fn default_path() -> String {
    "/".to_string()
}

impl UserBackup {
    /// Parse a backup document.
    ///
    /// # Errors
    ///
    /// Returns `SealError::InvalidInput` if the document is malformed or the
    /// user name is empty.
    pub fn from_json(input: &str) -> Result<Self> {
        let backup: UserBackup = serde_json::from_str(input)
            .map_err(|e| SealError::InvalidInput(format!("Malformed backup document: {}", e)))?;
        if backup.user.user_name.trim().is_empty() {
            return Err(SealError::InvalidInput(
                "Backup document has an empty User.UserName".to_string(),
            ));
        }
        Ok(backup)
    }

    /// Read and parse a backup document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let backup = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            user = %backup.user.user_name,
            "loaded backup document"
        );
        Ok(backup)
    }

    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to `path` atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut contents = self.to_json_pretty()?;
        contents.push('\n');
        write_atomic(path, contents.as_bytes())?;
        Ok(())
    }
}

/// Generate the `aws iam` commands that recreate the backed-up user.
///
/// Order: create the user, join groups, attach managed policies, put inline
/// policies, tag, and create the console login profile.
pub fn recreation_commands(backup: &UserBackup, password_placeholder: &str) -> Vec<String> {
    let user = shell_word(&backup.user.user_name);
    let mut commands = vec![format!(
        "aws iam create-user --user-name {} --path {}",
        user,
        shell_word(&backup.user.path)
    )];

    for group in &backup.groups {
        commands.push(format!(
            "aws iam add-user-to-group --user-name {} --group-name {}",
            user,
            shell_word(group)
        ));
    }

    for policy in &backup.attached_policies {
        commands.push(format!(
            "aws iam attach-user-policy --user-name {} --policy-arn {}",
            user,
            shell_word(&policy.policy_arn)
        ));
    }

    for policy in &backup.inline_policies {
        commands.push(format!(
            "aws iam put-user-policy --user-name {} --policy-name {} --policy-document {}",
            user,
            shell_word(&policy.policy_name),
            single_quote(&policy.policy_document.to_string())
        ));
    }

    if !backup.tags.is_empty() {
        let tags: Vec<String> = backup
            .tags
            .iter()
            .map(|tag| shell_word(&format!("Key={},Value={}", tag.key, tag.value)))
            .collect();
        commands.push(format!(
            "aws iam tag-user --user-name {} --tags {}",
            user,
            tags.join(" ")
        ));
    }

    if backup.login_profile.is_some() {
        commands.push(format!(
            "aws iam create-login-profile --user-name {} --password {} --password-reset-required",
            user,
            shell_word(password_placeholder)
        ));
    }

    commands
}

/// Comment lines describing what must be recreated by hand.
pub fn manual_followups(backup: &UserBackup) -> Vec<String> {
    let mut notes = vec![MANUAL_FOLLOWUP_NOTE.to_string()];
    for key in &backup.access_keys {
        notes.push(format!("#   access key {} ({})", key.access_key_id, key.status));
    }
    for device in &backup.mfa_devices {
        notes.push(format!("#   MFA device {}", device.serial_number));
    }
    for cert in &backup.signing_certificates {
        notes.push(format!(
            "#   signing certificate {} ({})",
            cert.certificate_id, cert.status
        ));
    }
    for key in &backup.ssh_public_keys {
        notes.push(format!(
            "#   SSH public key {} ({})",
            key.ssh_public_key_id, key.status
        ));
    }
    if !backup.service_specific_credentials.is_empty() {
        notes.push(format!(
            "#   {} service-specific credential(s)",
            backup.service_specific_credentials.len()
        ));
    }
    notes
}

// Wrap in single quotes for a POSIX shell; embedded quotes become '\''.
fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

// Plain words pass through; anything else is single-quoted.
fn shell_word(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@+,%".contains(c));
    if plain {
        value.to_string()
    } else {
        single_quote(value)
    }
}
