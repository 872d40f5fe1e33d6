//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create an envault command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - The native backend, so the `age` binary is not required
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("ENVAULT_BACKEND", "native");
        cmd
    }

    /// Like [`Test::cmd`] but leaves the backend at its default.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envault").expect("failed to find envault binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in ["ENVAULT_ROOT", "ENVAULT_BACKEND", "ENVAULT_IDENTITY", "ENVAULT_LOG"] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `envault init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run envault init")
    }

    /// Shortcut for `envault add-key`.
    pub fn add_key(&self, key: &str) -> Output {
        self.cmd()
            .args(["add-key", key])
            .output()
            .expect("failed to run envault add-key")
    }

    /// Shortcut for `envault remove-key`.
    pub fn remove_key(&self, fingerprint: &str) -> Output {
        self.cmd()
            .args(["remove-key", fingerprint])
            .output()
            .expect("failed to run envault remove-key")
    }

    /// Shortcut for `envault list-keys`.
    pub fn list_keys(&self) -> Output {
        self.cmd()
            .arg("list-keys")
            .output()
            .expect("failed to run envault list-keys")
    }

    /// Shortcut for `envault list-keys --json`.
    pub fn list_keys_json(&self) -> Output {
        self.cmd()
            .args(["list-keys", "--json"])
            .output()
            .expect("failed to run envault list-keys --json")
    }

    /// Fingerprints of all authorized keys, in registry order.
    pub fn fingerprints(&self) -> Vec<String> {
        let output = self.list_keys_json();
        super::assert_success(&output);
        let parsed: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("valid JSON");
        parsed["keys"]
            .as_array()
            .expect("keys array")
            .iter()
            .map(|k| k["fingerprint"].as_str().expect("fingerprint").to_string())
            .collect()
    }

    /// Shortcut for `envault encrypt`.
    pub fn encrypt(&self, env: &str, file: &str) -> Output {
        self.cmd()
            .args(["encrypt", env, file])
            .output()
            .expect("failed to run envault encrypt")
    }

    /// Shortcut for `envault decrypt`.
    pub fn decrypt(&self, env: &str) -> Output {
        self.cmd()
            .args(["decrypt", env])
            .output()
            .expect("failed to run envault decrypt")
    }

    /// `envault decrypt` using a specific private key.
    pub fn decrypt_as(&self, env: &str, identity: &Path) -> Output {
        self.cmd()
            .arg("--identity")
            .arg(identity)
            .args(["decrypt", env])
            .output()
            .expect("failed to run envault decrypt")
    }

    /// Shortcut for `envault reencrypt [env]`.
    pub fn reencrypt(&self, env: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("reencrypt");
        if let Some(env) = env {
            cmd.arg(env);
        }
        cmd.output().expect("failed to run envault reencrypt")
    }

    /// Shortcut for `envault <env>`.
    pub fn load(&self, env: &str) -> Output {
        self.cmd()
            .arg(env)
            .output()
            .expect("failed to run envault load")
    }

    /// Shortcut for `envault check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run envault check")
    }
}
