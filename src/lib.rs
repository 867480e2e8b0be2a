//! localvault - decrypt a project's encrypted vault into a local vault.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create the vault and an identity
//! │   ├── secrets       # set / list
//! │   ├── decrypt       # decrypt-to-local and its report
//! │   └── output        # Styled terminal output
//! └── core/             # Core library components
//!     ├── config        # .localvault.toml management
//!     ├── cipher/       # age encryption
//!     ├── domain/       # Identity, SecretValue, Outcome
//!     ├── store/        # SecretStore trait and implementations
//!     │   ├── encrypted # The age-encrypted vault
//!     │   ├── dotenv    # The .env.local local vault
//!     │   └── memory    # In-process store
//!     └── reconcile     # Vault to local vault copy
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{Outcome, SecretValue};
pub use crate::core::reconcile::reconcile;
pub use crate::core::store::{Dotenv, Encrypted, Listing, Memory, SecretStore};
pub use crate::error::{Error, Result};
