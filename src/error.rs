//! Error types.
//!
//! One top-level [`Error`] wraps a small enum per concern so callers can
//! match on the failure kind while the binary just prints the message.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all envault operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("check found {problems} problem(s)")]
    Check { problems: usize },

    #[error("failed to re-encrypt: {}", .failed.join(", "))]
    Reencrypt { failed: Vec<String> },

    #[error("{0}")]
    Usage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors for `.envault/config.yaml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: .envault/config.yaml not found")]
    NotInitialized,

    #[error("already initialized: .envault directory exists")]
    AlreadyInitialized,

    #[error("failed to read config.yaml: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse config.yaml: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("invalid config.yaml:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),

    #[error("environment {0} not found in config.yaml")]
    EnvironmentNotFound(String),
}

/// Authorized-keys registry errors.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("invalid key on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid key: {0}")]
    Invalid(String),

    #[error("key already exists (fingerprint: {fingerprint})")]
    Duplicate { fingerprint: String },

    #[error("key with fingerprint {0} not found")]
    NotFound(String),

    #[error("failed to read authorized_keys: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write authorized_keys: {0}")]
    Write(#[source] std::io::Error),
}

/// Encryption backend errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("no authorized keys found")]
    EmptyRecipientSet,

    #[error("{0} is not installed")]
    PrerequisiteMissing(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("encrypted file {0} does not exist")]
    MissingArtifact(String),
}

/// Local filesystem errors: private keys and decrypted targets.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no SSH private key found in {dir} (tried: {})", .tried.join(", "))]
    NoPrivateKey { dir: String, tried: Vec<String> },

    #[error("failed to write {}: {source}", .path.display())]
    TargetWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to determine home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, Error>;
