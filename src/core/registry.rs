//! Authorized keys registry.
//!
//! A line-oriented file of OpenSSH public keys. The file doubles as the
//! recipient list handed to the encryption backend, so it must stay in a
//! format `age -R` accepts: one key per line, `#` comments and blank lines
//! allowed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::domain::Key;
use crate::core::fs::write_atomic;
use crate::error::{KeyError, Result};

/// Handle to an `authorized_keys` file.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All keys in file order.
    ///
    /// A missing file reads as an empty registry.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Parse` with the 1-based line number of the first
    /// malformed entry.
    pub fn list(&self) -> Result<Vec<Key>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no authorized_keys file");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(KeyError::Read)?;
        let mut keys = Vec::new();

        for (i, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let key = Key::parse(line).map_err(|reason| KeyError::Parse { line: i + 1, reason })?;
            keys.push(key);
        }

        debug!(count = keys.len(), "loaded authorized keys");
        Ok(keys)
    }

    /// Whether the registry holds no keys.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.list()?.is_empty())
    }

    /// Parse and append a key.
    ///
    /// `raw` may carry blank and `#` comment lines around the key, as a
    /// `.pub` file can, but must hold exactly one key.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Invalid` for malformed input or more than one key,
    /// and `KeyError::Duplicate` if the same key data is already registered.
    /// The file is untouched in all cases.
    pub fn add(&self, raw: &str) -> Result<Key> {
        let key = parse_single(raw)?;

        let existing = self.list()?;
        if let Some(dup) = existing.iter().find(|k| k.data() == key.data()) {
            return Err(KeyError::Duplicate {
                fingerprint: dup.fingerprint().to_string(),
            }
            .into());
        }

        // Keep the appended line on its own even if the file lacks a trailing newline.
        let needs_newline = fs::read(&self.path)
            .map(|bytes| bytes.last().is_some_and(|b| *b != b'\n'))
            .unwrap_or(false);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(KeyError::Write)?;
        let line = if needs_newline {
            format!("\n{}\n", key.to_line())
        } else {
            format!("{}\n", key.to_line())
        };
        file.write_all(line.as_bytes()).map_err(KeyError::Write)?;

        info!(fingerprint = %key.fingerprint(), "added authorized key");
        Ok(key)
    }

    /// Remove the key with the given fingerprint, preserving the order of
    /// the rest.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if no key matches.
    pub fn remove(&self, fingerprint: &str) -> Result<Key> {
        let fingerprint = fingerprint.trim();

        // A hand-edited or merged file may list the same key more than once.
        let (removed, kept): (Vec<Key>, Vec<Key>) = self
            .list()?
            .into_iter()
            .partition(|k| k.fingerprint() == fingerprint);
        let removed = removed
            .into_iter()
            .next()
            .ok_or_else(|| KeyError::NotFound(fingerprint.to_string()))?;

        let contents: String = kept.iter().map(|k| format!("{}\n", k.to_line())).collect();
        write_atomic(&self.path, contents.as_bytes(), 0o644)?;

        info!(fingerprint = %fingerprint, remaining = kept.len(), "removed authorized key");
        Ok(removed)
    }
}

/// The one key in user-supplied text, ignoring blank and comment lines.
fn parse_single(raw: &str) -> Result<Key> {
    let mut lines = raw
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (_, line) = lines
        .next()
        .ok_or_else(|| KeyError::Invalid("no key found (comment lines are ignored)".to_string()))?;
    if let Some((extra, _)) = lines.next() {
        return Err(KeyError::Invalid(format!(
            "line {} holds another key; add keys one at a time",
            extra
        ))
        .into());
    }

    Ok(Key::parse(line).map_err(KeyError::Invalid)?)
}
