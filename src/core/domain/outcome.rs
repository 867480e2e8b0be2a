//! Reconciliation outcome.
//!
//! Records what happened to every secret found in the source vault.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::core::types::SecretName;

/// A per-secret report line, recorded in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A source secret could not be read.
    Failed(String),
    /// The destination's diagnostic after a write.
    Noted(String),
}

/// Result of one reconciliation run.
///
/// `skipped`, `failed` and `copied` are pairwise disjoint and together
/// account for every secret found in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    total_found: usize,
    skipped: BTreeSet<SecretName>,
    failed: BTreeMap<SecretName, String>,
    copied: BTreeSet<SecretName>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
    #[serde(skip)]
    events: Vec<Event>,
}

impl Outcome {
    pub(crate) fn new(total_found: usize) -> Self {
        Self {
            total_found,
            ..Self::default()
        }
    }

    pub(crate) fn skip(&mut self, name: SecretName) {
        self.skipped.insert(name);
    }

    pub(crate) fn fail(&mut self, name: SecretName, message: String) {
        self.events.push(Event::Failed(message.clone()));
        self.failed.insert(name, message);
    }

    pub(crate) fn copy(&mut self, name: SecretName, note: Option<String>) {
        self.copied.insert(name);
        if let Some(note) = note {
            self.events.push(Event::Noted(note.clone()));
            self.notes.push(note);
        }
    }

    /// Number of secrets enumerated from the source.
    pub fn total_found(&self) -> usize {
        self.total_found
    }

    /// Secrets already present in the destination and left untouched.
    pub fn skipped(&self) -> &BTreeSet<SecretName> {
        &self.skipped
    }

    /// Unreadable source secrets with their diagnostic message.
    pub fn failed(&self) -> &BTreeMap<SecretName, String> {
        &self.failed
    }

    /// Secrets written to the destination.
    pub fn copied(&self) -> &BTreeSet<SecretName> {
        &self.copied
    }

    /// Advisory messages returned by the destination while sealing, in write order.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Failures and notes interleaved in the order secrets were processed.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Whether any source secret could not be read.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
