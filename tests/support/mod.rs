//! Test support utilities for envault integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own project dir and home dir. Child processes use
/// `.current_dir()` and `HOME` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

/// An SSH key pair generated for a test.
pub struct KeyPair {
    pub private: PathBuf,
    pub public_path: PathBuf,
    pub public: String,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with envault initialized.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Initialized workspace whose only authorized key is the user's own
    /// `~/.ssh/id_ed25519`.
    pub fn with_user_key() -> Self {
        let t = Self::init();
        let key = t.user_key();
        let output = t.add_key(&key.public_path.to_string_lossy());
        assert!(
            output.status.success(),
            "Failed to add key: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Generate `~/.ssh/id_ed25519` in the temp home.
    pub fn user_key(&self) -> KeyPair {
        let ssh = self.home.path().join(".ssh");
        fs::create_dir_all(&ssh).expect("failed to create .ssh");
        keygen(&ssh.join("id_ed25519"), "me@example.com")
    }

    /// Generate a key outside the home directory.
    pub fn other_key(&self, name: &str) -> KeyPair {
        let keys = self.home.path().join("other-keys");
        fs::create_dir_all(&keys).expect("failed to create key dir");
        keygen(&keys.join(name), &format!("{}@example.com", name))
    }

    /// Write a file under the project directory.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Read a file under the project directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).expect("failed to read file")
    }

    /// Path under the project directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Replace `.envault/config.yaml`.
    pub fn write_config(&self, yaml: &str) {
        self.write(".envault/config.yaml", yaml);
    }
}

/// Run `ssh-keygen` to create an unencrypted ed25519 key.
pub fn keygen(private: &Path, comment: &str) -> KeyPair {
    let status = StdCommand::new("ssh-keygen")
        .args(["-q", "-t", "ed25519", "-N", "", "-C", comment, "-f"])
        .arg(private)
        .status()
        .expect("failed to run ssh-keygen");
    assert!(status.success(), "ssh-keygen failed");

    let public_path = private.with_extension("pub");
    let public = fs::read_to_string(&public_path)
        .expect("failed to read public key")
        .trim()
        .to_string();

    KeyPair {
        private: private.to_path_buf(),
        public_path,
        public,
    }
}
