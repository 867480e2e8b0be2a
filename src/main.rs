//! localvault - decrypt a project's encrypted vault into a local vault.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use localvault::cli::output;
use localvault::cli::{execute, Cli, Context};
use localvault::core::constants;
use localvault::error::{ConfigError, Error, ReconcileError, StoreError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("localvault=debug")
        } else {
            EnvFilter::new("localvault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let ctx = Context {
        vault: cli.vault,
        identity: cli.identity,
    };

    match execute(cli.command, &ctx) {
        Ok(code) => code,
        Err(e) => {
            let suggestion = match &e {
                Error::Config(ConfigError::NotInitialized) => Some("run: localvault init"),
                Error::Config(ConfigError::NoRecipients) => Some("run: localvault init"),
                Error::Reconcile(ReconcileError::DestinationDisabled) => {
                    Some("set `disabled = false` under [local] in .localvault.toml")
                }
                Error::Store(StoreError::NoPrivateKey(_)) => {
                    Some("pass --identity or run: localvault init")
                }
                _ => None,
            };

            output::error(&e.to_string());
            if let Some(hint) = suggestion {
                output::hint(hint);
            }
            ExitCode::FAILURE
        }
    }
}
