//! Core library components.
//!
//! Secret stores, the encrypted vault format, and the reconciliation that
//! copies a vault into a local vault.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod reconcile;
pub mod store;
pub mod types;
