//! Vault to local vault reconciliation.
//!
//! Copies every readable secret from a source store into a destination
//! store. Secrets the destination already holds are skipped unless `force`
//! is set; secrets the source cannot read are reported and left alone.

use tracing::{debug, info, warn};

use crate::core::domain::{Outcome, SecretValue};
use crate::core::store::SecretStore;
use crate::error::{ReconcileError, Result};

/// Copy secrets from `source` into `destination`.
///
/// 1. Everything in `source` is listed, unreadable entries included.
/// 2. Without `force`, names already present in `destination` are skipped.
///    Only presence is checked; values are never compared.
/// 3. Each remaining secret is either recorded as failed (unreadable) or
///    sealed into `destination`, one at a time.
///
/// The source is read completely before the first write.
///
/// # Errors
///
/// Returns `ReconcileError::DestinationDisabled` without touching either
/// store when `destination` is `None`. Listing errors from either store are
/// returned as-is. A seal error aborts the run as
/// `ReconcileError::SealFailed`; secrets sealed before it stay written.
pub fn reconcile(
    source: &dyn SecretStore,
    destination: Option<&mut dyn SecretStore>,
    force: bool,
) -> Result<Outcome> {
    let Some(destination) = destination else {
        return Err(ReconcileError::DestinationDisabled.into());
    };

    info!(
        source = %source.describe(),
        destination = %destination.describe(),
        force,
        "reconciling"
    );

    let (mut candidates, source_message) = source.list(true)?.into_parts();
    let mut outcome = Outcome::new(candidates.len());

    if !force {
        let existing = destination.list(false)?;
        for name in existing.secrets().keys() {
            if candidates.remove(name).is_some() {
                debug!(name = %name, "already in local vault, skipping");
                outcome.skip(name.clone());
            }
        }
    }

    for (name, value) in candidates {
        match value {
            SecretValue::Unreadable { reason } => {
                let message = reason
                    .or_else(|| source_message.clone())
                    .unwrap_or_else(|| {
                        format!(
                            "Secret \"{}\" has been skipped as there was an error reading it.",
                            name
                        )
                    });
                warn!(name = %name, "secret cannot be read");
                outcome.fail(name, message);
            }
            SecretValue::Readable(bytes) => {
                let note = destination.seal(&name, &bytes).map_err(|e| {
                    ReconcileError::SealFailed {
                        name: name.clone(),
                        copied: outcome.copied().len(),
                        source: Box::new(e),
                    }
                })?;
                debug!(name = %name, "secret copied");
                outcome.copy(name, note);
            }
        }
    }

    info!(
        found = outcome.total_found(),
        skipped = outcome.skipped().len(),
        failed = outcome.failed().len(),
        copied = outcome.copied().len(),
        "reconciled"
    );

    Ok(outcome)
}
