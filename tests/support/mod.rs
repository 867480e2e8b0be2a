//! Test support utilities for localvault integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir. Child
/// processes use `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with the vault initialized.
    pub fn init(name: &str) -> Self {
        let t = Self::new();
        let output = t.init_cmd(name);
        assert!(
            output.status.success(),
            "Failed to initialize vault: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with the vault initialized and secrets set.
    pub fn with_secrets(name: &str, secrets: &[(&str, &str)]) -> Self {
        let t = Self::init(name);
        for (k, v) in secrets {
            let output = t.set(k, v);
            assert!(
                output.status.success(),
                "Failed to set secret {}: {}",
                k,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path to the encrypted vault file.
    pub fn vault_path(&self) -> PathBuf {
        self.dir.path().join(".localvault.toml")
    }

    /// Path to the local vault file.
    pub fn local_path(&self) -> PathBuf {
        self.dir.path().join(".env.local")
    }

    /// Contents of the local vault, or `None` if it doesn't exist.
    pub fn local_contents(&self) -> Option<String> {
        fs::read_to_string(self.local_path()).ok()
    }

    /// Write the local vault file.
    pub fn write_local(&self, contents: &str) {
        fs::write(self.local_path(), contents).expect("failed to write local vault");
    }

    /// Edit the vault file as a TOML table.
    pub fn edit_vault(&self, edit: impl FnOnce(&mut toml::Table)) {
        let contents = fs::read_to_string(self.vault_path()).expect("failed to read vault");
        let mut doc: toml::Table = contents.parse().expect("vault is not valid TOML");
        edit(&mut doc);
        fs::write(self.vault_path(), toml::to_string_pretty(&doc).unwrap())
            .expect("failed to write vault");
    }

    /// Store a secret nobody in this test can decrypt.
    pub fn add_foreign_secret(&self, name: &str) {
        let stranger = age::x25519::Identity::generate();
        let ciphertext =
            localvault::core::cipher::encrypt(b"not yours", &[stranger.to_public()]).unwrap();
        self.edit_vault(|doc| {
            let secrets = doc
                .entry("secrets")
                .or_insert(toml::Value::Table(toml::Table::new()));
            secrets
                .as_table_mut()
                .expect("secrets is not a table")
                .insert(name.to_string(), toml::Value::String(ciphertext));
        });
    }

    /// Disable the local vault in the vault file.
    pub fn disable_local(&self) {
        self.edit_vault(|doc| {
            let mut local = toml::Table::new();
            local.insert("disabled".to_string(), toml::Value::Boolean(true));
            doc.insert("local".to_string(), toml::Value::Table(local));
        });
    }
}
