//! Domain types.

pub mod identity;
mod outcome;
mod secret;

pub use identity::Identity;
pub use outcome::{Event, Outcome};
pub use secret::SecretValue;
