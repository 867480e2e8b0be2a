//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name (e.g., DATABASE_URL, API_KEY).
///
/// Unique within a store.
pub type SecretName = String;

/// An encrypted secret value (age-armored ciphertext).
pub type EncryptedValue = String;

/// An age public key string (starts with "age1...").
pub type PublicKey = String;

/// A recipient name in the project vault.
pub type MemberName = String;
