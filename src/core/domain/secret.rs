//! Secret value type.
//!
//! A listed secret is either readable plaintext or an explicit read failure,
//! so an empty value is never confused with one that could not be decrypted.

use zeroize::Zeroizing;

/// The result of reading one secret from a store.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretValue {
    /// Decrypted plaintext, wiped on drop.
    Readable(Zeroizing<Vec<u8>>),
    /// The secret exists but could not be read.
    Unreadable {
        /// Store-provided explanation, if any.
        reason: Option<String>,
    },
}

impl SecretValue {
    /// Wrap plaintext bytes.
    pub fn readable(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Readable(Zeroizing::new(bytes.into()))
    }

    /// An unreadable entry with an explanation.
    pub fn unreadable(reason: impl Into<String>) -> Self {
        Self::Unreadable {
            reason: Some(reason.into()),
        }
    }

    /// Whether the value was read successfully.
    pub fn is_readable(&self) -> bool {
        matches!(self, Self::Readable(_))
    }

    /// Plaintext bytes, if readable.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Readable(bytes) => Some(bytes.as_slice()),
            Self::Unreadable { .. } => None,
        }
    }
}

// Never print plaintext, even in debug logs.
impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Readable(bytes) => write!(f, "Readable(<{} bytes>)", bytes.len()),
            Self::Unreadable { reason } => f
                .debug_struct("Unreadable")
                .field("reason", reason)
                .finish(),
        }
    }
}
