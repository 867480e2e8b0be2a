//! Secret management commands: set and list.

use std::collections::BTreeMap;

use tracing::info;

use crate::cli::{output, Context};
use crate::core::constants;
use crate::core::domain::SecretValue;
use crate::core::store::{Encrypted, SecretStore};
use crate::error::Result;

/// Encrypt a secret into the vault, overwriting any previous value.
pub fn set(ctx: &Context, name: &str, value: &str) -> Result<()> {
    info!(name = %name, "setting secret");
    let mut vault = Encrypted::open(&ctx.vault, ctx.identity.as_deref())?;

    let existed = vault.config().secrets.contains_key(name);
    let message = vault.seal(name, value.as_bytes())?;

    if existed {
        output::warn(&format!("overwrote {}", output::key(name)));
    }
    if let Some(message) = message {
        output::success(&message);
    }
    Ok(())
}

/// List secret names, optionally with their decrypted values.
pub fn list(ctx: &Context, reveal: bool, json: bool) -> Result<()> {
    let vault = Encrypted::open(&ctx.vault, ctx.identity.as_deref())?;

    if !reveal {
        let names: Vec<&String> = vault.config().secrets.keys().collect();
        if json {
            output::data(&serde_json::to_string_pretty(&names)?);
        } else if names.is_empty() {
            output::comment("no secrets stored");
        } else {
            for name in names {
                output::list_item(name);
            }
        }
        return Ok(());
    }

    let listing = vault.list(true)?;

    if json {
        let values: BTreeMap<&str, Option<String>> = listing
            .secrets()
            .iter()
            .map(|(name, value)| {
                let shown = value
                    .bytes()
                    .map(|b| String::from_utf8_lossy(b).into_owned());
                (name.as_str(), shown)
            })
            .collect();
        output::data(&serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if listing.is_empty() {
        output::comment("no secrets stored");
        return Ok(());
    }

    let mut unreadable = 0;
    for (name, value) in listing.secrets() {
        match value {
            SecretValue::Readable(bytes) => output::kv(name, &String::from_utf8_lossy(bytes)),
            SecretValue::Unreadable { .. } => {
                unreadable += 1;
                output::kv(name, constants::MASK);
            }
        }
    }

    if unreadable > 0 {
        let fallback = format!(
            "{} could not be decrypted",
            output::plural(unreadable, "secret")
        );
        output::warn(listing.message().unwrap_or(&fallback));
    }
    Ok(())
}
