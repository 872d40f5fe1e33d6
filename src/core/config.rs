//! Configuration file management.
//!
//! Handles reading, writing, and validating `.envault/config.yaml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.envault/config.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Map of environment names to their encrypted file and targets
    #[serde(default)]
    pub environments: BTreeMap<String, Environment>,
}

/// A named secrets bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// File name of the ciphertext inside `.envault/`
    #[serde(default)]
    pub encrypted_file: String,
    /// Where decrypted secrets are written, relative to the workspace root
    #[serde(default)]
    pub targets: Vec<Target>,
}

/// A file receiving decrypted plaintext verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub path: String,
}

impl Target {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Config {
    /// Path to the configuration file under a workspace root
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(constants::ENVAULT_DIR).join(constants::CONFIG_FILE)
    }

    /// Load configuration from `<root>/.envault/config.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the YAML is malformed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::Read)?;
        let config: Self = serde_yaml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(environments = config.environments.len(), "config loaded");
        Ok(config)
    }

    /// Save configuration to `<root>/.envault/config.yaml`
    pub fn save(&self, root: &Path) -> Result<()> {
        debug!("saving config");

        let contents = serde_yaml::to_string(self).map_err(ConfigError::Serialize)?;
        std::fs::write(Self::config_path(root), contents)?;

        Ok(())
    }

    /// Validate the configuration structure
    ///
    /// Collects every problem instead of stopping at the first one:
    /// - At least one environment exists
    /// - Each environment names an encrypted file that stays inside `.envault`
    /// - Each environment has at least one target
    /// - Target paths are non-empty, relative and stay inside the root
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` listing all problems found.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        let mut problems = Vec::new();

        if self.environments.is_empty() {
            problems.push("no environments defined".to_string());
        }

        for (name, env) in &self.environments {
            if env.encrypted_file.trim().is_empty() {
                problems.push(format!("environment {}: encrypted_file is required", name));
            } else if escapes(&env.encrypted_file) {
                problems.push(format!(
                    "environment {}: encrypted_file {} must stay inside {}",
                    name,
                    env.encrypted_file,
                    constants::ENVAULT_DIR
                ));
            }
            if env.targets.is_empty() {
                problems.push(format!(
                    "environment {}: at least one target is required",
                    name
                ));
            }
            for (i, target) in env.targets.iter().enumerate() {
                if target.path.trim().is_empty() {
                    problems.push(format!("environment {}: target {} has empty path", name, i));
                } else if Path::new(&target.path).is_absolute() {
                    problems.push(format!(
                        "environment {}: target path {} should be relative, not absolute",
                        name, target.path
                    ));
                } else if escapes(&target.path) {
                    problems.push(format!(
                        "environment {}: target path {} must not contain ..",
                        name, target.path
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems).into())
        }
    }

    /// Look up an environment by name
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvironmentNotFound` if the name is not configured.
    pub fn environment(&self, name: &str) -> Result<&Environment> {
        self.environments
            .get(name)
            .ok_or_else(|| ConfigError::EnvironmentNotFound(name.to_string()).into())
    }

    /// Environment names in sorted order
    pub fn environment_names(&self) -> Vec<String> {
        self.environments.keys().cloned().collect()
    }
}

/// Whether a configured path is absolute or climbs out with `..`.
fn escapes(path: &str) -> bool {
    let path = Path::new(path);
    path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
}

/// Default configuration written by `envault init`: a single `dev`
/// environment unlocked to `.env` at the workspace root.
pub fn default_config() -> Config {
    let mut environments = BTreeMap::new();
    environments.insert(
        "dev".to_string(),
        Environment {
            encrypted_file: "dev.age".to_string(),
            targets: vec![Target::new(".env")],
        },
    );
    Config { environments }
}

/// Ensure a `.gitignore` contains the given entries
///
/// Appends missing entries, creating the file if needed. Existing content
/// is left untouched.
pub fn ensure_gitignore(path: &Path, entries: &[&str]) -> Result<()> {
    let existing = if path.exists() {
        std::fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in entries {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        debug!(path = %path.display(), "updating gitignore");
        std::fs::write(path, updated)?;
    }

    Ok(())
}
