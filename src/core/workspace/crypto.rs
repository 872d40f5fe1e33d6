//! Encrypt, decrypt and re-encrypt environments.
//!
//! The recipient set is always the registry as it is on disk when the
//! operation runs. Re-encrypting after a key is removed is therefore what
//! revokes access; artifacts committed earlier remain readable to the old
//! key in version history.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use super::Workspace;
use crate::core::config::Environment;
use crate::core::fs::write_atomic;
use crate::error::{CipherError, Error, Result};

/// Outcome of re-encrypting every environment.
#[derive(Debug, Default)]
pub struct ReencryptReport {
    /// Environments re-encrypted successfully, in config order.
    pub reencrypted: Vec<String>,
    /// Environments that failed, with the reason.
    pub failed: Vec<(String, Error)>,
}

impl ReencryptReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Workspace {
    /// Encrypt plaintext for every authorized key and store it as the
    /// environment's encrypted file, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvironmentNotFound` for unknown environments,
    /// `CipherError::EmptyRecipientSet` if no keys are authorized, and
    /// `CipherError::EncryptionFailed` if the backend fails.
    pub fn encrypt(&self, environment: &str, plaintext: &[u8]) -> Result<PathBuf> {
        let config = self.config()?;
        let env = config.environment(environment)?;
        self.encrypt_environment(environment, env, plaintext)
    }

    /// Read a plaintext file and encrypt it for `environment`.
    pub fn encrypt_file(&self, environment: &str, path: &Path) -> Result<PathBuf> {
        let plaintext = Zeroizing::new(fs::read(path)?);
        self.encrypt(environment, &plaintext)
    }

    /// Decrypt an environment with the caller's private key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MissingArtifact` if nothing was encrypted yet,
    /// `StoreError::NoPrivateKey` if no private key is found, and
    /// `CipherError::DecryptionFailed` if the key is not a recipient.
    pub fn decrypt(&self, environment: &str) -> Result<Zeroizing<Vec<u8>>> {
        let config = self.config()?;
        let env = config.environment(environment)?;
        self.decrypt_environment(environment, env)
    }

    /// Decrypt with the current key and encrypt for the current registry.
    pub fn reencrypt(&self, environment: &str) -> Result<()> {
        let config = self.config()?;
        let env = config.environment(environment)?;

        let plaintext = self.decrypt_environment(environment, env)?;
        self.encrypt_environment(environment, env, &plaintext)?;

        info!(environment, "re-encrypted");
        Ok(())
    }

    /// Re-encrypt every configured environment.
    ///
    /// Failures don't stop the run and nothing is rolled back: environments
    /// that succeeded stay re-encrypted even if a later one fails.
    ///
    /// # Errors
    ///
    /// Only fails if the config itself can't be loaded; per-environment
    /// failures are collected in the report.
    pub fn reencrypt_all(&self) -> Result<ReencryptReport> {
        let config = self.config()?;
        let mut report = ReencryptReport::default();

        for name in config.environment_names() {
            match self.reencrypt(&name) {
                Ok(()) => report.reencrypted.push(name),
                Err(e) => {
                    warn!(environment = %name, error = %e, "re-encryption failed");
                    report.failed.push((name, e));
                }
            }
        }

        Ok(report)
    }

    /// Whether the caller can decrypt `environment` right now.
    pub fn can_decrypt(&self, environment: &str) -> Result<()> {
        self.decrypt(environment).map(|_| ())
    }

    pub(super) fn encrypt_environment(
        &self,
        name: &str,
        env: &Environment,
        plaintext: &[u8],
    ) -> Result<PathBuf> {
        let registry = self.registry();
        if registry.is_empty()? {
            return Err(CipherError::EmptyRecipientSet.into());
        }

        let ciphertext = self.cipher.encrypt(plaintext, registry.path())?;

        let path = self.artifact_path(env);
        write_atomic(&path, &ciphertext, 0o644)?;

        info!(
            environment = name,
            path = %path.display(),
            backend = self.cipher.name(),
            "encrypted"
        );
        Ok(path)
    }

    pub(super) fn decrypt_environment(
        &self,
        name: &str,
        env: &Environment,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let path = self.artifact_path(env);
        if !path.is_file() {
            return Err(CipherError::MissingArtifact(env.encrypted_file.clone()).into());
        }

        let identity = self.identity.locate()?;
        let ciphertext = fs::read(&path)?;
        debug!(environment = name, identity = %identity.display(), "decrypting");

        self.cipher.decrypt(&ciphertext, &identity)
    }
}
