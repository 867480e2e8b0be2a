//! Decrypt-to-local command - copy the vault into the local vault.

use std::process::ExitCode;

use tracing::info;

use crate::cli::{output, Context};
use crate::core::config::Config;
use crate::core::domain::{Event, Outcome};
use crate::core::reconcile::reconcile;
use crate::core::store::{Dotenv, Encrypted};
use crate::error::{ReconcileError, Result};

/// Decrypt every secret and store it in the local vault.
pub fn execute(ctx: &Context, force: bool, exit: bool, json: bool) -> Result<ExitCode> {
    info!(force, exit, "running decrypt-to-local");

    let config = Config::load(&ctx.vault)?;
    let Some(local_path) = config.local_path() else {
        return Err(ReconcileError::DestinationDisabled.into());
    };

    let vault = Encrypted::unlock(config, ctx.identity.as_deref())?;
    let mut local = Dotenv::new(local_path);

    let outcome = reconcile(&vault, Some(&mut local), force)?;

    if json {
        output::data(&serde_json::to_string_pretty(&outcome)?);
    } else {
        report(&outcome);
    }

    Ok(if should_fail(&outcome, exit) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Render an outcome for humans.
pub fn report(outcome: &Outcome) {
    output::comment(&format!(
        "{} found in the vault.",
        output::plural(outcome.total_found(), "secret")
    ));

    let skipped = outcome.skipped().len();
    if skipped > 0 {
        output::warn(&format!(
            "{} already overridden in the local vault and will be skipped.",
            if skipped == 1 {
                "1 secret is".to_string()
            } else {
                format!("{} secrets are", skipped)
            }
        ));
        output::hint("Use the --force flag to override these.");
    }

    for event in outcome.events() {
        match event {
            Event::Failed(message) => output::error(message),
            Event::Noted(note) => output::note(note),
        }
    }
}

/// Whether the run should end with a non-zero exit code.
///
/// Unreadable secrets only fail the run when `strict` (`--exit`) is set.
pub fn should_fail(outcome: &Outcome, strict: bool) -> bool {
    strict && outcome.has_failures()
}
