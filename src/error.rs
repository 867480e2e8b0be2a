//! Error types.
//!
//! A top-level [`Error`] wraps one enum per concern so callers can match on
//! the failing layer (configuration, storage, encryption, reconciliation).

use thiserror::Error;

/// Top-level error for all localvault operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: no .localvault.toml in this directory")]
    NotInitialized,

    #[error("already initialized: .localvault.toml exists")]
    AlreadyInitialized,

    #[error("no recipients configured")]
    NoRecipients,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Secret store and key storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {path}: {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no private key found in {0}")]
    NoPrivateKey(String),

    #[error("invalid key format: {0}")]
    InvalidFormat(String),

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("secret '{0}' cannot be stored in a dotenv file: value is not valid UTF-8")]
    InvalidValue(String),

    #[error("malformed line {line} in {path}")]
    Malformed { path: String, line: usize },

    #[error("seal rejected for '{0}'")]
    Rejected(String),
}

/// Encryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor failed: {0}")]
    ArmorFailed(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
}

/// Reconciliation failures that abort the whole run.
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("the local vault is disabled")]
    DestinationDisabled,

    #[error("failed to seal secret \"{name}\" after copying {copied} secret(s): {source}")]
    SealFailed {
        name: String,
        copied: usize,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
