//! The fixed set of named password fields.
//!
//! A request carries an optional `encryption_key` and up to five password
//! fields. Missing or `null` fields are read as the empty string, and every
//! output carries all five fields. With a non-blank key every field is
//! sealed, including ones the caller omitted, so an omitted field comes
//! back as a sealed empty string rather than `""`. Consumers rely on that
//! shape.
//!
//! Processing is all-or-nothing: the first failing field fails the whole
//! set and no partial output is produced.

use serde::{Deserialize, Deserializer, Serialize};

use crate::cipher;
use crate::error::{Result, SealError};

/// Field names, in output order.
pub const FIELD_NAMES: [&str; 5] = [
    "service_password",
    "keystore_password",
    "db_password",
    "rabbitmq_password",
    "keystone_password",
];

/// The five password fields. Values are plaintext or sealed strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    #[serde(default, deserialize_with = "string_or_null")]
    pub service_password: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub keystore_password: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub db_password: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub rabbitmq_password: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub keystone_password: String,
}

impl FieldSet {
    /// Iterate `(name, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FIELD_NAMES.into_iter().zip([
            self.service_password.as_str(),
            self.keystore_password.as_str(),
            self.db_password.as_str(),
            self.rabbitmq_password.as_str(),
            self.keystone_password.as_str(),
        ])
    }

    /// Seal every field under `passphrase`.
    ///
    /// A blank passphrase returns the set unchanged.
    pub fn encrypt_all(&self, passphrase: &str) -> Result<FieldSet> {
        if cipher::is_blank(passphrase) {
            return Ok(self.clone());
        }
        self.try_map(|name, value| {
            tracing::debug!(field = name, "sealing field");
            cipher::encrypt(value, passphrase)
        })
    }

    /// Recover every field sealed under `passphrase`.
    ///
    /// A blank passphrase returns the set unchanged. Empty values stay
    /// empty: a sealed value is never empty, so they can only be omitted
    /// fields.
    pub fn decrypt_all(&self, passphrase: &str) -> Result<FieldSet> {
        if cipher::is_blank(passphrase) {
            return Ok(self.clone());
        }
        self.try_map(|name, value| {
            if value.is_empty() {
                return Ok(String::new());
            }
            tracing::debug!(field = name, "unsealing field");
            cipher::decrypt(value, passphrase)
        })
    }

    fn try_map<F>(&self, mut f: F) -> Result<FieldSet>
    where
        F: FnMut(&str, &str) -> Result<String>,
    {
        let mut apply = |name: &str, value: &str| f(name, value).map_err(|e| e.in_field(name));
        Ok(FieldSet {
            service_password: apply(FIELD_NAMES[0], &self.service_password)?,
            keystore_password: apply(FIELD_NAMES[1], &self.keystore_password)?,
            db_password: apply(FIELD_NAMES[2], &self.db_password)?,
            rabbitmq_password: apply(FIELD_NAMES[3], &self.rabbitmq_password)?,
            keystone_password: apply(FIELD_NAMES[4], &self.keystone_password)?,
        })
    }
}

/// A request read from the input channel.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldRequest {
    #[serde(default, deserialize_with = "string_or_null")]
    pub encryption_key: String,
    #[serde(flatten)]
    pub fields: FieldSet,
}

impl FieldRequest {
    /// Parse a request document.
    ///
    /// # Errors
    ///
    /// Returns `SealError::InvalidInput` if the text is not JSON, is not a
    /// JSON object, or a recognised field holds a non-string value.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| SealError::InvalidInput(format!("Malformed JSON: {}", e)))?;
        if !value.is_object() {
            return Err(SealError::InvalidInput(
                "Expected a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| SealError::InvalidInput(format!("Invalid request: {}", e)))
    }

    /// Whether this request asks for sealing at all.
    pub fn has_key(&self) -> bool {
        !cipher::is_blank(&self.encryption_key)
    }

    /// Seal the request's fields under its key.
    pub fn encrypt(&self) -> Result<FieldSet> {
        self.fields.encrypt_all(&self.encryption_key)
    }

    /// Unseal the request's fields with its key.
    pub fn decrypt(&self) -> Result<FieldSet> {
        self.fields.decrypt_all(&self.encryption_key)
    }
}

/// The failure document: an `error` description plus all five fields
/// set to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub error: String,
    #[serde(flatten)]
    pub fields: FieldSet,
}

impl FailureReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: FieldSet::default(),
        }
    }
}

impl From<&SealError> for FailureReport {
    fn from(err: &SealError) -> Self {
        FailureReport::new(err.to_string())
    }
}

fn string_or_null<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
