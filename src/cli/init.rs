//! Init command - create the .envault directory.

use tracing::info;

use crate::cli::output;
use crate::core::constants;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Initialize envault under the workspace root.
pub fn execute(ws: &Workspace) -> Result<()> {
    info!(root = %ws.root().display(), "initializing");

    let config = ws.init()?;

    output::success(&format!("initialized {} directory", constants::ENVAULT_DIR));
    output::success(&format!(
        "created {} with {} environment(s)",
        constants::CONFIG_FILE,
        config.environments.len()
    ));
    output::success(&format!("created empty {}", constants::AUTHORIZED_KEYS_FILE));

    output::blank();
    output::header("Next steps");
    output::list_item(&format!(
        "add your key: {}",
        output::cmd("envault add-key ~/.ssh/id_ed25519.pub")
    ));
    output::list_item(&format!(
        "encrypt secrets: {}",
        output::cmd("envault encrypt dev secrets.plaintext")
    ));
    output::list_item(&format!(
        "commit {}",
        output::path(constants::ENVAULT_DIR)
    ));
    Ok(())
}
