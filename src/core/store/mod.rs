//! Secret stores.
//!
//! A [`SecretStore`] is anything secrets can be listed from and sealed into.
//! The reconciler only ever talks to this trait.
//!
//! ## Implementations
//!
//! - [`Encrypted`]: the age-encrypted project vault (`.localvault.toml`)
//! - [`Dotenv`]: the plaintext local vault (`.env.local`)
//! - [`Memory`]: in-process store for tests and benchmarks
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use std::collections::BTreeMap;

use crate::core::domain::SecretValue;
use crate::core::types::SecretName;
use crate::error::{Result, StoreError};

mod dotenv;
mod encrypted;
mod memory;

pub use dotenv::Dotenv;
pub use encrypted::Encrypted;
pub use memory::Memory;

/// Secret storage trait.
///
/// Each call returns its own diagnostic message instead of leaving it in
/// shared state, so a message can never outlive the call that produced it.
pub trait SecretStore {
    /// Human-readable label (usually a file path) for logs and messages.
    fn describe(&self) -> String;

    /// Enumerate all secrets.
    ///
    /// With `include_unreadable`, secrets that failed to decrypt are returned
    /// as [`SecretValue::Unreadable`]; otherwise they are omitted.
    ///
    /// # Errors
    ///
    /// Per-secret failures are never errors. Returns `StoreError` only when
    /// the store as a whole cannot be read.
    fn list(&self, include_unreadable: bool) -> Result<Listing>;

    /// Persist `value` under `name`, overwriting any existing entry.
    ///
    /// Returns an advisory message describing what happened (for example
    /// whether the secret was added or updated).
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be stored; callers treat this as
    /// a malfunction of the store.
    fn seal(&mut self, name: &str, value: &[u8]) -> Result<Option<String>>;
}

/// Secrets returned by [`SecretStore::list`] plus the call's diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    secrets: BTreeMap<SecretName, SecretValue>,
    message: Option<String>,
}

impl Listing {
    /// Create a listing from a set of secrets.
    pub fn new(secrets: BTreeMap<SecretName, SecretValue>) -> Self {
        Self {
            secrets,
            message: None,
        }
    }

    /// Attach a store-level diagnostic.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Listed secrets, ordered by name.
    pub fn secrets(&self) -> &BTreeMap<SecretName, SecretValue> {
        &self.secrets
    }

    /// Store-level diagnostic produced while listing.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether a secret with this name was listed.
    pub fn contains(&self, name: &str) -> bool {
        self.secrets.contains_key(name)
    }

    /// Number of listed secrets.
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Whether nothing was listed.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Split into secrets and diagnostic.
    pub fn into_parts(self) -> (BTreeMap<SecretName, SecretValue>, Option<String>) {
        (self.secrets, self.message)
    }
}

impl FromIterator<(SecretName, SecretValue)> for Listing {
    fn from_iter<I: IntoIterator<Item = (SecretName, SecretValue)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Validate a secret name.
///
/// Names end up as dotenv keys, so they must be valid environment variable
/// names:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason: String| StoreError::InvalidName {
        name: name.to_string(),
        reason,
    };

    let Some(first) = name.chars().next() else {
        return Err(invalid("cannot be empty".to_string()).into());
    };

    if first.is_ascii_digit() {
        return Err(invalid("cannot start with a digit".to_string()).into());
    }

    if let Some((i, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '_')
    {
        return Err(invalid(format!(
            "invalid character '{}' at position {}",
            ch,
            i + 1
        ))
        .into());
    }

    Ok(())
}
