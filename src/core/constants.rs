//! Constants used throughout localvault.
//!
//! Centralizes file names and environment variable names.

/// Project vault file name (.localvault.toml).
pub const CONFIG_FILE: &str = ".localvault.toml";

/// Default local vault file name (.env.local).
pub const LOCAL_FILE: &str = ".env.local";

/// Key storage directory relative to HOME (~/.localvault/keys).
pub const KEY_DIR: &str = ".localvault/keys";

/// Identity file name inside a project key directory.
pub const IDENTITY_FILE: &str = "identity.key";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "LOCALVAULT_LOG";

/// Placeholder printed instead of an unreadable value.
pub const MASK: &str = "******";
