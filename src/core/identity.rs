//! Private key discovery.
//!
//! Decryption needs the caller's SSH private key. Unless a path is given
//! explicitly, the first existing file from a fixed list of conventional
//! names under `~/.ssh` is used.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{Result, StoreError};

/// Where to find the private key used for decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityLocator {
    /// Search `<dir>` for the conventional key names.
    SshDir(PathBuf),
    /// Use exactly this file.
    File(PathBuf),
}

impl IdentityLocator {
    /// Search `~/.ssh` of the current user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoHomeDir` if the home directory is unknown.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(Self::SshDir(home.join(constants::SSH_DIR)))
    }

    /// An explicit override if given, otherwise `~/.ssh`.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        match explicit {
            Some(path) => Ok(Self::File(path)),
            None => Self::from_home(),
        }
    }

    /// Path of the private key to decrypt with.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoPrivateKey` listing the names that were tried.
    pub fn locate(&self) -> Result<PathBuf> {
        match self {
            Self::File(path) => {
                if path.is_file() {
                    Ok(path.clone())
                } else {
                    Err(not_found(
                        path.parent().unwrap_or(Path::new(".")),
                        &[path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default()],
                    ))
                }
            }
            Self::SshDir(dir) => {
                for name in constants::PRIVATE_KEY_NAMES {
                    let candidate = dir.join(name);
                    if candidate.is_file() {
                        debug!(path = %candidate.display(), "found private key");
                        return Ok(candidate);
                    }
                }
                let tried: Vec<String> = constants::PRIVATE_KEY_NAMES
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                Err(not_found(dir, &tried))
            }
        }
    }
}

fn not_found(dir: &Path, tried: &[String]) -> crate::error::Error {
    StoreError::NoPrivateKey {
        dir: dir.display().to_string(),
        tried: tried.to_vec(),
    }
    .into()
}
