//! Identity type.
//!
//! Wraps an age private key loaded from (or generated into) a key file.

use std::fs;
use std::path::{Path, PathBuf};

use age::x25519;
use tracing::{debug, warn};

use crate::core::constants;
use crate::core::types::PublicKey;
use crate::error::{Result, StoreError};

/// A private key identity for decrypting secrets
pub struct Identity {
    inner: x25519::Identity,
    path: PathBuf,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("public_key", &self.public_key())
            .field("path", &self.path)
            .finish()
    }
}

impl Identity {
    /// Load an identity from a key file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoPrivateKey` if the file doesn't exist and
    /// `StoreError::InvalidFormat` if it doesn't hold an age secret key.
    pub fn load(key_path: &Path) -> Result<Self> {
        debug!(path = %key_path.display(), "loading identity");

        if !key_path.exists() {
            return Err(StoreError::NoPrivateKey(key_path.display().to_string()).into());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = fs::metadata(key_path) {
                let mode = metadata.permissions().mode() & 0o777;
                if mode != 0o600 {
                    warn!(
                        path = %key_path.display(),
                        mode = %format!("{:o}", mode),
                        "insecure key file permissions"
                    );
                }
            }
        }

        let contents = fs::read_to_string(key_path).map_err(|source| StoreError::Unavailable {
            path: key_path.display().to_string(),
            source,
        })?;

        let inner: x25519::Identity = contents
            .trim()
            .parse()
            .map_err(|e: &str| StoreError::InvalidFormat(e.to_string()))?;

        debug!("identity loaded");

        Ok(Self {
            inner,
            path: key_path.to_path_buf(),
        })
    }

    /// Generate a new identity and save it to `key_path` with mode 0600.
    pub fn generate(key_path: &Path) -> Result<Self> {
        debug!(path = %key_path.display(), "generating new identity");

        let inner = x25519::Identity::generate();
        let write_failed = |source| StoreError::WriteFailed {
            path: key_path.display().to_string(),
            source,
        };

        if let Some(dir) = key_path.parent() {
            fs::create_dir_all(dir).map_err(write_failed)?;
        }

        // Display on the secret outputs AGE-SECRET-KEY-...
        use age::secrecy::ExposeSecret;
        let secret_str = inner.to_string();
        fs::write(key_path, format!("{}\n", secret_str.expose_secret())).map_err(write_failed)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(key_path, fs::Permissions::from_mode(0o600))
                .map_err(write_failed)?;
        }

        debug!(path = %key_path.display(), "identity saved");

        Ok(Self {
            inner,
            path: key_path.to_path_buf(),
        })
    }

    /// Default key file for a project (`~/.localvault/keys/<project_id>/identity.key`).
    pub fn default_path(project_id: &str) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(home
            .join(constants::KEY_DIR)
            .join(project_id)
            .join(constants::IDENTITY_FILE))
    }

    /// Corresponding public key
    pub fn public_key(&self) -> PublicKey {
        self.inner.to_public().to_string()
    }

    /// Reference to the inner age identity for decryption
    pub fn as_age(&self) -> &x25519::Identity {
        &self.inner
    }

    /// Key file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
