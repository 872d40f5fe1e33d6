//! Command-line interface.

pub mod check;
pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod init;
pub mod keys;
pub mod load;
pub mod output;
pub mod reencrypt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::cipher::Backend;
use crate::core::identity::IdentityLocator;
use crate::core::workspace::Workspace;
use crate::error::{Error, Result};

/// envault - Encrypted environment secrets.
#[derive(Parser, Debug)]
#[command(
    name = "envault",
    about = "Encrypted environment secrets, unlocked with your SSH key",
    version,
    after_help = "Examples:\n  envault init\n  envault add-key ~/.ssh/id_ed25519.pub\n  envault encrypt dev secrets.txt\n  envault dev"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Workspace root containing .envault
    #[arg(long, global = true, env = "ENVAULT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Encryption backend
    #[arg(
        long,
        global = true,
        env = "ENVAULT_BACKEND",
        value_enum,
        default_value_t = Backend::Age
    )]
    pub backend: Backend,

    /// Private key to decrypt with (default: first of ~/.ssh/id_ed25519, id_rsa, id_ecdsa, id_dsa)
    #[arg(long, global = true, env = "ENVAULT_IDENTITY")]
    pub identity: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the .envault directory
    Init,

    /// Add an SSH public key (a .pub file or the key text)
    AddKey {
        /// Path to a public key file, or the key itself
        #[arg(required = true, num_args = 1..)]
        key: Vec<String>,
    },

    /// Remove an SSH public key by fingerprint
    RemoveKey {
        /// Fingerprint shown by list-keys
        fingerprint: String,
    },

    /// List authorized keys
    ListKeys {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt a plaintext file for an environment
    Encrypt {
        /// Environment name
        environment: String,
        /// Plaintext secrets file
        file: PathBuf,
    },

    /// Decrypt an environment to stdout
    Decrypt {
        /// Environment name
        environment: String,
    },

    /// Re-encrypt with the current keys (all environments if none given)
    Reencrypt {
        /// Environment name
        environment: Option<String>,
    },

    /// Verify configuration, keys and encrypted files
    Check,

    /// Show version
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Load an environment's secrets into its target files
    #[command(external_subcommand)]
    Load(Vec<String>),
}

impl Command {
    /// Commands that run the cipher backend.
    fn needs_cipher(&self) -> bool {
        matches!(
            self,
            Command::Encrypt { .. }
                | Command::Decrypt { .. }
                | Command::Reencrypt { .. }
                | Command::Check
                | Command::Load(_)
        )
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let cipher = cli.backend.cipher();
    if cli.command.needs_cipher() {
        cipher.check()?;
    }

    match &cli.command {
        Version => {
            println!("envault version {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Completions { shell } => return completions::execute(*shell),
        _ => {}
    }

    let identity = IdentityLocator::resolve(cli.identity)?;
    let ws = Workspace::new(cli.root, cipher, identity);
    debug!(workspace = ?ws, "resolved workspace");

    match cli.command {
        Init => init::execute(&ws),
        AddKey { key } => keys::add(&ws, &key),
        RemoveKey { fingerprint } => keys::rm(&ws, &fingerprint),
        ListKeys { json } => keys::list(&ws, json),
        Encrypt { environment, file } => encrypt::execute(&ws, &environment, &file),
        Decrypt { environment } => decrypt::execute(&ws, &environment),
        Reencrypt { environment } => reencrypt::execute(&ws, environment.as_deref()),
        Check => check::execute(&ws),
        Load(args) => match args.as_slice() {
            [environment] => load::execute(&ws, environment),
            _ => Err(Error::Usage(format!(
                "unexpected arguments: {}",
                args.join(" ")
            ))),
        },
        Version | Completions { .. } => Ok(()),
    }
}
