//! Cryptographic operations.
//!
//! envault performs no cryptography itself. A [`Cipher`] turns plaintext
//! into ciphertext for a file of recipients, and back again with a private
//! key file. Orchestration code only sees this trait.
//!
//! ## Backends
//!
//! - **age** (default): runs the external `age` binary.
//! - **native**: in-process encryption with the `age` crate's SSH support.
//!
//! Both read and write the binary age format, so an artifact produced by one
//! can be decrypted by the other.

use std::path::Path;

use zeroize::Zeroizing;

use crate::error::Result;

mod age;
mod backend;
mod command;

pub use age::NativeAge;
pub use backend::Backend;
pub use command::AgeCommand;

/// Encryption backend.
///
/// Recipients and identities are passed as files so the external tool can
/// read them directly.
pub trait Cipher {
    /// Backend name for display.
    fn name(&self) -> &'static str;

    /// Verify the backend can run at all, before any other work.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::PrerequisiteMissing` if a required tool is absent.
    fn check(&self) -> Result<()> {
        Ok(())
    }

    /// Encrypt plaintext for every key in `recipients`.
    ///
    /// # Arguments
    ///
    /// * `plaintext` - Bytes to encrypt
    /// * `recipients` - File of OpenSSH public keys, one per line
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` with backend diagnostics.
    fn encrypt(&self, plaintext: &[u8], recipients: &Path) -> Result<Vec<u8>>;

    /// Decrypt ciphertext with the private key at `identity`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` with backend diagnostics,
    /// including when the key is not among the recipients.
    fn decrypt(&self, ciphertext: &[u8], identity: &Path) -> Result<Zeroizing<Vec<u8>>>;
}
