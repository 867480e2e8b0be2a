//! Configuration file management.
//!
//! Handles reading and writing the `.localvault.toml` project vault: the
//! encrypted secrets, their recipients, and where the local vault lives.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::cipher;
use crate::core::constants;
use crate::core::types::{EncryptedValue, MemberName, PublicKey, SecretName};
use crate::error::{ConfigError, Result};

/// Project vault stored in `.localvault.toml`
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the vault file
    pub localvault: Meta,
    /// Local vault settings
    #[serde(default, skip_serializing_if = "LocalConfig::is_default")]
    pub local: LocalConfig,
    /// Map of recipient names to age public keys
    #[serde(default)]
    pub recipients: BTreeMap<MemberName, PublicKey>,
    /// Map of secret names to their encrypted values
    #[serde(default)]
    pub secrets: BTreeMap<SecretName, EncryptedValue>,
    #[serde(skip)]
    path: PathBuf,
}

/// Metadata section of the configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
}

/// Where decrypted secrets are copied to.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Dotenv file path, relative to the project directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Disable the local vault entirely
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl LocalConfig {
    fn is_default(&self) -> bool {
        self.path.is_none() && !self.disabled
    }
}

impl Config {
    /// Create a new empty configuration at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            localvault: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            local: LocalConfig::default(),
            recipients: BTreeMap::new(),
            secrets: BTreeMap::new(),
            path: path.into(),
        }
    }

    /// Load configuration from `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.path = path.to_path_buf();

        debug!(
            secrets = config.secrets.len(),
            recipients = config.recipients.len(),
            "config loaded"
        );

        Ok(config)
    }

    /// Save configuration back to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(&self.path, contents)?;

        Ok(())
    }

    /// File backing this configuration
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unique project identifier based on the directory holding the vault file
    pub fn project_id(&self) -> String {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir().unwrap_or_default(),
        };
        let dir = dir.canonicalize().unwrap_or(dir);
        dir.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "default".to_string())
    }

    /// Local vault file, or `None` when the local vault is disabled.
    ///
    /// Relative paths resolve against the directory holding the vault file.
    pub fn local_path(&self) -> Option<PathBuf> {
        if self.local.disabled {
            return None;
        }
        let file = self.local.path.as_deref().unwrap_or(constants::LOCAL_FILE);
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(file))
    }

    /// Parse all configured recipients.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoRecipients` if none are configured, or
    /// `CipherError::InvalidPublicKey` if any key is malformed.
    pub fn recipients(&self) -> Result<Vec<age::x25519::Recipient>> {
        if self.recipients.is_empty() {
            return Err(ConfigError::NoRecipients.into());
        }
        self.recipients
            .values()
            .map(|k| cipher::parse_recipient(k))
            .collect()
    }
}
