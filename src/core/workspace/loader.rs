//! Write decrypted environments to their target files.

use std::path::PathBuf;

use tracing::{debug, info};

use super::Workspace;
use crate::core::fs::write_atomic;
use crate::error::Result;

/// Mode for decrypted target files.
const TARGET_MODE: u32 = 0o600;

impl Workspace {
    /// Decrypt `environment` once and write the plaintext to every target.
    ///
    /// Targets are written in configured order, each atomically. A failure
    /// stops at that target; earlier targets keep their new content.
    ///
    /// # Returns
    ///
    /// Absolute paths of the written targets.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvironmentNotFound` for unknown environments,
    /// any decryption error, or `StoreError::TargetWriteFailed`.
    pub fn load(&self, environment: &str) -> Result<Vec<PathBuf>> {
        let config = self.config()?;
        let env = config.environment(environment)?;

        let plaintext = self.decrypt_environment(environment, env)?;

        let mut written = Vec::with_capacity(env.targets.len());
        for target in &env.targets {
            let path = self.root.join(&target.path);
            debug!(path = %path.display(), "writing target");
            write_atomic(&path, &plaintext, TARGET_MODE)?;
            written.push(path);
        }

        info!(environment, targets = written.len(), "loaded environment");
        Ok(written)
    }

    /// Configured target paths of `environment`, relative to the root.
    pub fn targets(&self, environment: &str) -> Result<Vec<String>> {
        let config = self.config()?;
        Ok(config
            .environment(environment)?
            .targets
            .iter()
            .map(|t| t.path.clone())
            .collect())
    }
}
