//! Authorized key operations.
//!
//! Changing the key set does not touch any encrypted file; access only
//! changes once environments are re-encrypted.

use super::Workspace;
use crate::core::domain::Key;
use crate::error::Result;

impl Workspace {
    /// Authorize a public key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` outside an initialized
    /// workspace, `KeyError::Invalid` for malformed keys and
    /// `KeyError::Duplicate` if the key data is already registered.
    pub fn add_key(&self, raw: &str) -> Result<Key> {
        self.ensure_initialized()?;
        self.registry().add(raw)
    }

    /// Revoke a public key by fingerprint.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if no key has that fingerprint.
    pub fn remove_key(&self, fingerprint: &str) -> Result<Key> {
        self.ensure_initialized()?;
        self.registry().remove(fingerprint)
    }

    /// Authorized keys in registry order.
    pub fn keys(&self) -> Result<Vec<Key>> {
        self.ensure_initialized()?;
        self.registry().list()
    }
}
