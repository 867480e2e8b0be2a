//! Encrypted project vault.
//!
//! Secrets live in `.localvault.toml`, each age-encrypted for every
//! configured recipient. Listing decrypts with the local identity; a secret
//! that fails to decrypt is reported in-band rather than as an error.

use std::path::Path;

use tracing::{debug, warn};

use super::{validate_name, Listing, SecretStore};
use crate::core::cipher;
use crate::core::config::Config;
use crate::core::domain::{Identity, SecretValue};
use crate::error::{Error, Result, StoreError};

/// The age-encrypted project vault.
#[derive(Debug)]
pub struct Encrypted {
    config: Config,
    identity: Option<Identity>,
}

impl Encrypted {
    /// Wrap a loaded configuration and an optional decryption identity.
    ///
    /// Without an identity the vault can still be listed (every secret is
    /// unreadable) and sealed into.
    pub fn new(config: Config, identity: Option<Identity>) -> Self {
        Self { config, identity }
    }

    /// Open the vault at `config_path`.
    ///
    /// The identity is read from `identity_path` when given, otherwise from
    /// the project's default key file. A missing key file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the vault file is missing or malformed, or
    /// `StoreError` if an existing key file cannot be parsed.
    pub fn open(config_path: &Path, identity_path: Option<&Path>) -> Result<Self> {
        Self::unlock(Config::load(config_path)?, identity_path)
    }

    /// Attach a decryption identity to an already loaded configuration.
    ///
    /// Same identity lookup as [`Encrypted::open`].
    pub fn unlock(config: Config, identity_path: Option<&Path>) -> Result<Self> {
        let key_path = match identity_path {
            Some(path) => path.to_path_buf(),
            None => Identity::default_path(&config.project_id())?,
        };

        let identity = match Identity::load(&key_path) {
            Ok(identity) => Some(identity),
            Err(Error::Store(StoreError::NoPrivateKey(path))) => {
                warn!(path = %path, "no decryption key, secrets cannot be revealed");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self::new(config, identity))
    }

    /// Underlying configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decryption identity, if one was found.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    fn file_name(&self) -> String {
        self.config
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.describe())
    }
}

impl SecretStore for Encrypted {
    fn describe(&self) -> String {
        self.config.path().display().to_string()
    }

    fn list(&self, include_unreadable: bool) -> Result<Listing> {
        debug!(
            secrets = self.config.secrets.len(),
            include_unreadable, "listing encrypted vault"
        );

        let Some(identity) = &self.identity else {
            let listing: Listing = self
                .config
                .secrets
                .keys()
                .filter(|_| include_unreadable)
                .map(|name| (name.clone(), SecretValue::Unreadable { reason: None }))
                .collect();
            return Ok(listing.with_message(format!(
                "Secrets cannot be revealed as no decryption key was found for \"{}\".",
                self.describe()
            )));
        };

        let listing = self
            .config
            .secrets
            .iter()
            .filter_map(
                |(name, encrypted)| match cipher::decrypt(encrypted, identity.as_age()) {
                    Ok(plaintext) => Some((name.clone(), SecretValue::Readable(plaintext))),
                    Err(e) => {
                        debug!(name = %name, error = %e, "secret cannot be decrypted");
                        include_unreadable.then(|| {
                            let reason =
                                format!("Secret \"{}\" cannot be decrypted: {}", name, e);
                            (name.clone(), SecretValue::unreadable(reason))
                        })
                    }
                },
            )
            .collect();

        Ok(listing)
    }

    fn seal(&mut self, name: &str, value: &[u8]) -> Result<Option<String>> {
        validate_name(name)?;

        let recipients = self.config.recipients()?;
        let encrypted = cipher::encrypt(value, &recipients)?;

        self.config.secrets.insert(name.to_string(), encrypted);
        self.config.save()?;

        debug!(name = %name, recipients = recipients.len(), "secret sealed");

        Ok(Some(format!(
            "Secret \"{}\" encrypted in \"{}\"; you can commit it.",
            name,
            self.file_name()
        )))
    }
}
