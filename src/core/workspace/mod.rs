//! The primary interface for envault operations.
//!
//! A [`Workspace`] is rooted at an explicit directory; nothing is looked up
//! relative to the process's current directory.

mod crypto;
mod keys;
mod loader;

pub use crypto::ReencryptReport;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::cipher::Cipher;
use crate::core::config::{self, Config};
use crate::core::constants;
use crate::core::identity::IdentityLocator;
use crate::core::registry::Registry;
use crate::error::{ConfigError, Result};

/// A repository using envault.
///
/// Owns the workspace root, the cipher backend and the private key lookup.
/// Config and registry are re-read by every operation so that each one sees
/// the files as they are on disk at that moment.
pub struct Workspace {
    root: PathBuf,
    cipher: Box<dyn Cipher>,
    identity: IdentityLocator,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("root", &self.root)
            .field("cipher", &self.cipher.name())
            .field("identity", &self.identity)
            .finish()
    }
}

impl Workspace {
    /// Create a workspace handle. Does not touch the filesystem.
    pub fn new(root: impl Into<PathBuf>, cipher: Box<dyn Cipher>, identity: IdentityLocator) -> Self {
        Self {
            root: root.into(),
            cipher,
            identity,
        }
    }

    /// Initialize `.envault` under the root.
    ///
    /// Creates the default config, an empty `authorized_keys`, an ignore file
    /// for plaintext leftovers, and adds the default targets to the root
    /// `.gitignore`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if `.envault` exists.
    pub fn init(&self) -> Result<Config> {
        let dir = self.envault_dir();
        if dir.exists() {
            return Err(ConfigError::AlreadyInitialized.into());
        }

        fs::create_dir_all(&dir)?;

        let config = config::default_config();
        config.save(&self.root)?;

        fs::write(self.registry_path(), "")?;

        config::ensure_gitignore(
            &dir.join(constants::GITIGNORE_FILE),
            constants::PLAINTEXT_PATTERNS,
        )?;

        let targets: Vec<&str> = config
            .environments
            .values()
            .flat_map(|env| env.targets.iter().map(|t| t.path.as_str()))
            .collect();
        config::ensure_gitignore(&self.root.join(constants::GITIGNORE_FILE), &targets)?;

        info!(root = %self.root.display(), "initialized envault");
        Ok(config)
    }

    /// Whether `.envault` exists under the root.
    pub fn is_initialized(&self) -> bool {
        self.envault_dir().is_dir()
    }

    /// Load and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized`, `ConfigError::Parse` or
    /// `ConfigError::Invalid`.
    pub fn config(&self) -> Result<Config> {
        let config = Config::load(&self.root)?;
        config.validate()?;
        Ok(config)
    }

    /// The authorized keys registry.
    pub fn registry(&self) -> Registry {
        Registry::new(self.registry_path())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cipher(&self) -> &dyn Cipher {
        self.cipher.as_ref()
    }

    pub fn identity(&self) -> &IdentityLocator {
        &self.identity
    }

    /// `<root>/.envault`
    pub fn envault_dir(&self) -> PathBuf {
        self.root.join(constants::ENVAULT_DIR)
    }

    /// `<root>/.envault/config.yaml`
    pub fn config_path(&self) -> PathBuf {
        Config::config_path(&self.root)
    }

    /// `<root>/.envault/authorized_keys`
    pub fn registry_path(&self) -> PathBuf {
        self.envault_dir().join(constants::AUTHORIZED_KEYS_FILE)
    }

    /// Path of an environment's encrypted file.
    pub fn artifact_path(&self, environment: &config::Environment) -> PathBuf {
        self.envault_dir().join(&environment.encrypted_file)
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(ConfigError::NotInitialized.into())
        }
    }
}
