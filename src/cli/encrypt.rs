//! Encrypt command.

use std::path::Path;

use crate::cli::output;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Encrypt `file` as the new secrets of `environment`.
pub fn execute(ws: &Workspace, environment: &str, file: &Path) -> Result<()> {
    let artifact = ws.encrypt_file(environment, file)?;

    let shown = artifact
        .strip_prefix(ws.root())
        .unwrap_or(artifact.as_path())
        .display()
        .to_string();
    output::success(&format!(
        "encrypted {} to {}",
        file.display(),
        output::path(&shown)
    ));
    output::hint(&format!("commit {} and delete the plaintext", shown));
    Ok(())
}
