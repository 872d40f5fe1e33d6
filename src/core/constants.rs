//! Constants used throughout envault.
//!
//! Centralizes file names and other magic strings.

/// Directory holding config, registry and encrypted files, relative to the
/// workspace root.
pub const ENVAULT_DIR: &str = ".envault";

/// Configuration file name inside [`ENVAULT_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Authorized public keys file name inside [`ENVAULT_DIR`].
pub const AUTHORIZED_KEYS_FILE: &str = "authorized_keys";

/// Ignore file name, used both inside [`ENVAULT_DIR`] and at the root.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Plaintext suffixes kept out of version control inside [`ENVAULT_DIR`].
pub const PLAINTEXT_PATTERNS: &[&str] = &["*.plaintext", "*.plain", "*.decrypted"];

/// External encryption binary.
pub const AGE_BINARY: &str = "age";

/// SSH directory relative to HOME.
pub const SSH_DIR: &str = ".ssh";

/// Private key file names, in order of preference.
pub const PRIVATE_KEY_NAMES: &[&str] = &["id_ed25519", "id_rsa", "id_ecdsa", "id_dsa"];

/// Number of SHA-256 bytes kept in a key fingerprint.
pub const FINGERPRINT_BYTES: usize = 8;

/// Suffix for sibling temp files used by atomic writes.
pub const TEMP_SUFFIX: &str = ".envault-tmp";
