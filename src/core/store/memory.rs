//! In-memory secret store.
//!
//! Holds secrets in a map and records how it was used, which makes it the
//! store of choice for tests and benchmarks.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;

use super::{Listing, SecretStore};
use crate::core::domain::SecretValue;
use crate::core::types::SecretName;
use crate::error::{Result, StoreError};

/// In-memory secret store.
#[derive(Debug, Default)]
pub struct Memory {
    secrets: BTreeMap<SecretName, SecretValue>,
    list_message: Option<String>,
    offline: bool,
    rejected: BTreeSet<SecretName>,
    list_calls: Cell<usize>,
    sealed: Vec<SecretName>,
}

impl Memory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a readable secret.
    pub fn with_secret(mut self, name: &str, value: impl Into<Vec<u8>>) -> Self {
        self.secrets
            .insert(name.to_string(), SecretValue::readable(value));
        self
    }

    /// Builder: add a secret that cannot be read, without an explanation.
    pub fn with_unreadable(mut self, name: &str) -> Self {
        self.secrets
            .insert(name.to_string(), SecretValue::Unreadable { reason: None });
        self
    }

    /// Builder: add a secret that cannot be read, with an explanation.
    pub fn with_unreadable_reason(mut self, name: &str, reason: &str) -> Self {
        self.secrets
            .insert(name.to_string(), SecretValue::unreadable(reason));
        self
    }

    /// Builder: diagnostic returned from every `list` call.
    pub fn with_list_message(mut self, message: &str) -> Self {
        self.list_message = Some(message.to_string());
        self
    }

    /// Builder: make every `list` call fail as if storage were unreachable.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Builder: make sealing `name` fail.
    pub fn rejecting(mut self, name: &str) -> Self {
        self.rejected.insert(name.to_string());
        self
    }

    /// Current value of a secret.
    pub fn get(&self, name: &str) -> Option<&SecretValue> {
        self.secrets.get(name)
    }

    /// Names of all stored secrets.
    pub fn names(&self) -> Vec<&str> {
        self.secrets.keys().map(String::as_str).collect()
    }

    /// How many times `list` has been called.
    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    /// Names passed to `seal`, in call order (including rejected ones).
    pub fn sealed(&self) -> &[SecretName] {
        &self.sealed
    }
}

impl SecretStore for Memory {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn list(&self, include_unreadable: bool) -> Result<Listing> {
        self.list_calls.set(self.list_calls.get() + 1);

        if self.offline {
            return Err(StoreError::Unavailable {
                path: self.describe(),
                source: io::Error::new(io::ErrorKind::NotConnected, "store is offline"),
            }
            .into());
        }

        let listing: Listing = self
            .secrets
            .iter()
            .filter(|(_, value)| include_unreadable || value.is_readable())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Ok(match &self.list_message {
            Some(message) => listing.with_message(message.clone()),
            None => listing,
        })
    }

    fn seal(&mut self, name: &str, value: &[u8]) -> Result<Option<String>> {
        self.sealed.push(name.to_string());

        if self.rejected.contains(name) {
            return Err(StoreError::Rejected(name.to_string()).into());
        }

        let existed = self
            .secrets
            .insert(name.to_string(), SecretValue::readable(value))
            .is_some();

        Ok(Some(if existed {
            format!("Secret \"{}\" already existed and was overwritten.", name)
        } else {
            format!("Secret \"{}\" created.", name)
        }))
    }
}
