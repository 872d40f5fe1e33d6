//! Load command - `envault <environment>`.

use crate::cli::output;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Decrypt `environment` into its target files.
pub fn execute(ws: &Workspace, environment: &str) -> Result<()> {
    let written = ws.load(environment)?;

    output::success(&format!("loaded {} secrets to:", environment));
    for path in &written {
        let shown = path.strip_prefix(ws.root()).unwrap_or(path.as_path());
        output::list_item(&output::path(&shown.display().to_string()));
    }
    Ok(())
}
