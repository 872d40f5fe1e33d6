//! Remove-key command - revoke an SSH public key.

use tracing::info;

use crate::cli::output;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Remove a key by fingerprint.
pub fn execute(ws: &Workspace, fingerprint: &str) -> Result<()> {
    let key = ws.remove_key(fingerprint)?;

    info!(fingerprint, "removed key");
    output::success(&format!("removed {}", key));
    output::warn("the key can still decrypt existing files until they are re-encrypted");
    output::hint("run: envault reencrypt");
    Ok(())
}
