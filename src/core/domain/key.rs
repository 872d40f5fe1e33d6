//! SSH public key type.
//!
//! Provides a parsed representation of an OpenSSH public key line and the
//! short fingerprint used to identify it.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::core::constants;

/// An authorized SSH public key.
///
/// Parsed from the OpenSSH `type data [comment]` format. The key data alone
/// determines identity: two keys with the same data and different comments
/// are the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    key_type: String,
    data: String,
    comment: Option<String>,
    fingerprint: String,
}

impl Key {
    /// Parse a key from a single line of text.
    ///
    /// Fields are split on whitespace; everything after the second field is
    /// the comment, rejoined with single spaces.
    ///
    /// # Errors
    ///
    /// Returns a reason string if the line has fewer than two fields or
    /// starts with `#`.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut parts = line.split_whitespace();
        let (key_type, data) = match (parts.next(), parts.next()) {
            (Some(t), Some(d)) => (t, d),
            _ => return Err("invalid key format (expected at least 2 fields)".to_string()),
        };
        if key_type.starts_with('#') {
            return Err("key is commented out".to_string());
        }

        let rest: Vec<&str> = parts.collect();
        let comment = if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        };

        Ok(Self {
            key_type: key_type.to_string(),
            data: data.to_string(),
            comment,
            fingerprint: fingerprint(data),
        })
    }

    /// Key algorithm, e.g. `ssh-ed25519` or `ssh-rsa`.
    pub fn key_type(&self) -> &str {
        &self.key_type
    }

    /// Base64 key material.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Trailing comment, usually an email address.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Short hex fingerprint derived from the key data.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Serialize back to a registry line (no trailing newline).
    pub fn to_line(&self) -> String {
        match &self.comment {
            Some(comment) => format!("{} {} {}", self.key_type, self.data, comment),
            None => format!("{} {}", self.key_type, self.data),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.fingerprint, self.key_type)?;
        if let Some(comment) = &self.comment {
            write!(f, " - {}", comment)?;
        }
        Ok(())
    }
}

/// Fingerprint of raw key data: hex of the leading bytes of its SHA-256.
pub fn fingerprint(data: &str) -> String {
    let hash = Sha256::digest(data.as_bytes());
    hash[..constants::FINGERPRINT_BYTES]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
