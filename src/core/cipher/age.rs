//! In-process age backend.
//!
//! Uses the `age` crate's SSH support, so no external binary is needed.
//! Supports `ssh-ed25519` and `ssh-rsa` keys; private keys must not be
//! passphrase-protected.

use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use ::age::ssh;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::domain::Key;
use crate::error::{CipherError, KeyError, Result};

/// age encryption without the `age` binary.
pub struct NativeAge;

impl NativeAge {
    /// Parse every key in a recipients file into an SSH recipient.
    fn recipients(path: &Path) -> Result<Vec<ssh::Recipient>> {
        let contents = fs::read_to_string(path).map_err(KeyError::Read)?;
        let mut recipients = Vec::new();

        for (i, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let key = Key::parse(line).map_err(|reason| KeyError::Parse { line: i + 1, reason })?;
            let recipient = format!("{} {}", key.key_type(), key.data())
                .parse::<ssh::Recipient>()
                .map_err(|_| {
                    CipherError::EncryptionFailed(format!(
                        "unsupported recipient {} on line {}",
                        key,
                        i + 1
                    ))
                })?;
            recipients.push(recipient);
        }

        Ok(recipients)
    }

    fn identity(path: &Path) -> Result<ssh::Identity> {
        let file = fs::File::open(path).map_err(|e| {
            CipherError::DecryptionFailed(format!("failed to read {}: {}", path.display(), e))
        })?;
        let identity =
            ssh::Identity::from_buffer(BufReader::new(file), Some(path.display().to_string()))
                .map_err(|e| {
                    CipherError::DecryptionFailed(format!(
                        "failed to parse {}: {}",
                        path.display(),
                        e
                    ))
                })?;

        match identity {
            ssh::Identity::Unencrypted(_) => Ok(identity),
            ssh::Identity::Encrypted(_) => Err(CipherError::DecryptionFailed(format!(
                "{} is passphrase-protected; use the age backend",
                path.display()
            ))
            .into()),
            ssh::Identity::Unsupported(_) => Err(CipherError::DecryptionFailed(format!(
                "{} is not a supported SSH key type",
                path.display()
            ))
            .into()),
        }
    }
}

impl Cipher for NativeAge {
    fn name(&self) -> &'static str {
        "native"
    }

    fn encrypt(&self, plaintext: &[u8], recipients: &Path) -> Result<Vec<u8>> {
        let recipients = Self::recipients(recipients)?;
        if recipients.is_empty() {
            return Err(CipherError::EmptyRecipientSet.into());
        }

        trace!(
            recipients = recipients.len(),
            plaintext_len = plaintext.len(),
            "encrypting"
        );

        let encryptor = ::age::Encryptor::with_recipients(
            recipients.iter().map(|r| r as &dyn ::age::Recipient),
        )
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(&mut encrypted)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        writer
            .write_all(plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        debug!(ciphertext_len = encrypted.len(), "encrypted");
        Ok(encrypted)
    }

    fn decrypt(&self, ciphertext: &[u8], identity: &Path) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let identity = Self::identity(identity)?;

        // Accepts both binary and ASCII-armored input.
        let reader = ::age::armor::ArmoredReader::new(ciphertext);
        let decryptor = ::age::Decryptor::new(reader)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn ::age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut decrypted = Zeroizing::new(Vec::new());
        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        debug!(plaintext_len = decrypted.len(), "decrypted");
        Ok(decrypted)
    }
}
