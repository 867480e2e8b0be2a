//! Command-line interface.

pub mod decrypt;
pub mod init;
pub mod output;
pub mod secrets;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::core::constants;
use crate::error::Result;

/// localvault - decrypt a project's encrypted vault into a local vault.
#[derive(Parser)]
#[command(
    name = "localvault",
    about = "Decrypt a project's encrypted vault into a local vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the encrypted vault file
    #[arg(long, global = true, env = "LOCALVAULT_VAULT", default_value = constants::CONFIG_FILE)]
    pub vault: PathBuf,

    /// Path to the age identity used for decryption
    #[arg(long, global = true, env = "LOCALVAULT_IDENTITY")]
    pub identity: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the vault and a decryption identity
    Init {
        /// Your name (used as recipient identifier)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Encrypt a secret into the vault
    Set {
        /// Secret name (e.g., DATABASE_URL)
        name: String,
        /// Secret value
        value: String,
    },

    /// List secrets in the vault
    List {
        /// Decrypt and show values
        #[arg(short, long)]
        reveal: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decrypt all secrets and store them in the local vault
    #[command(after_help = "\
Secrets that already exist in the local vault are skipped unless --force is given.
With --exit, the command returns a non-zero exit code if any secret could not be read.")]
    DecryptToLocal {
        /// Override secrets that already exist in the local vault
        #[arg(short, long)]
        force: bool,
        /// Return a non-zero exit code if any errors are encountered
        #[arg(long)]
        exit: bool,
        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Paths shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Encrypted vault file
    pub vault: PathBuf,
    /// Explicit identity file, if given
    pub identity: Option<PathBuf>,
}

/// Execute a command.
pub fn execute(command: Command, ctx: &Context) -> Result<ExitCode> {
    use Command::*;

    match command {
        Init { name } => init::execute(ctx, name).map(|()| ExitCode::SUCCESS),
        Set { name, value } => secrets::set(ctx, &name, &value).map(|()| ExitCode::SUCCESS),
        List { reveal, json } => secrets::list(ctx, reveal, json).map(|()| ExitCode::SUCCESS),
        DecryptToLocal { force, exit, json } => decrypt::execute(ctx, force, exit, json),
    }
}
