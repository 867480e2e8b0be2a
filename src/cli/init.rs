//! Init command - create the vault file and a decryption identity.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::config::Config;
use crate::core::domain::Identity;
use crate::error::{ConfigError, Result};

/// Create `.localvault.toml` with the caller as its first recipient.
pub fn execute(ctx: &Context, name: Option<String>) -> Result<()> {
    if ctx.vault.exists() {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    let name = name
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "me".to_string());
    info!(name = %name, vault = %ctx.vault.display(), "initializing vault");

    let mut config = Config::new(&ctx.vault);
    let key_path = match &ctx.identity {
        Some(path) => path.clone(),
        None => Identity::default_path(&config.project_id())?,
    };

    let identity = if key_path.exists() {
        Identity::load(&key_path)?
    } else {
        Identity::generate(&key_path)?
    };

    config.recipients.insert(name.clone(), identity.public_key());
    config.save()?;

    output::success(&format!("initialized {}", ctx.vault.display()));
    output::kv("recipient:", &name);
    output::kv("identity: ", &identity.path().display().to_string());
    Ok(())
}
