//! Cryptographic operations.
//!
//! The encrypted vault only needs two capabilities: encrypt bytes for a set
//! of recipients and decrypt them with one identity. age is the only backend.

use ::age::x25519;
use zeroize::Zeroizing;

use crate::error::Result;

mod age;

pub use age::{parse_recipient, Age};

/// Cryptographic backend trait.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private identity/key.
    type Identity;

    /// Encrypt plaintext for multiple recipients.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &[u8], recipients: &[Self::Recipient]) -> Result<String>;

    /// Decrypt an encrypted string using a private identity.
    ///
    /// The plaintext is wrapped in `Zeroizing` so it is wiped on drop.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if decryption fails or the key doesn't match.
    fn decrypt(&self, encrypted: &str, identity: &Self::Identity) -> Result<Zeroizing<Vec<u8>>>;
}

/// Encrypt plaintext for multiple age recipients.
pub fn encrypt(plaintext: &[u8], recipients: &[x25519::Recipient]) -> Result<String> {
    Age.encrypt(plaintext, recipients)
}

/// Decrypt an age-encrypted string using a private identity.
pub fn decrypt(encrypted: &str, identity: &x25519::Identity) -> Result<Zeroizing<Vec<u8>>> {
    Age.decrypt(encrypted, identity)
}
