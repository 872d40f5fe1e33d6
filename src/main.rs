//! envault - Encrypted environment secrets, unlocked with your SSH key.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envault::cli::output;
use envault::cli::{execute, Cli};
use envault::error::{CipherError, ConfigError, Error, KeyError, StoreError};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so `envault decrypt` output stays clean.
    let filter = EnvFilter::try_from_env("ENVAULT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envault=debug")
        } else {
            EnvFilter::new("envault=warn")
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

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::error_hint(hint);
        }
        std::process::exit(1);
    }
}

/// Follow-up command for errors the user can fix directly.
fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::NotInitialized) => Some("run: envault init"),
        Error::Config(ConfigError::EnvironmentNotFound(_)) => {
            Some("add it under environments in .envault/config.yaml")
        }
        Error::Cipher(CipherError::EmptyRecipientSet) => {
            Some("run: envault add-key ~/.ssh/id_ed25519.pub")
        }
        Error::Cipher(CipherError::PrerequisiteMissing(_)) => {
            Some("install age from https://age-encryption.org or pass --backend native")
        }
        Error::Cipher(CipherError::MissingArtifact(_)) => {
            Some("run: envault encrypt <environment> <file>")
        }
        Error::Store(StoreError::NoPrivateKey { .. }) => {
            Some("pass --identity <path> to use another private key")
        }
        Error::Key(KeyError::NotFound(_)) => Some("run: envault list-keys"),
        _ => None,
    }
}
