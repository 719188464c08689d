//! # Credseal Core
//!
//! Core library for Credseal - password-field sealing for deployment
//! configuration payloads, plus offline tooling for IAM user backups.
//!
//! This crate provides the cipher construction, field orchestration and
//! backup document model independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **cipher**: PBKDF2-HMAC-SHA256 key derivation, AES-256-CBC sealing and
//!   the base64 `salt || iv || ciphertext` framing
//! - **fields**: The fixed set of named password fields and their
//!   all-or-nothing encryption/decryption
//! - **backup**: IAM user backup documents and recreation commands
//! - **fs**: Atomic file replacement

pub mod backup;
pub mod cipher;
pub mod error;
pub mod fields;
pub mod fs;

pub use error::{Result, SealError};
pub use fields::{FailureReport, FieldRequest, FieldSet};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
