//! Add-key command - authorize an SSH public key.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::cli::output;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Add a key given either as a path to a `.pub` file or as the key text.
pub fn execute(ws: &Workspace, args: &[String]) -> Result<()> {
    let raw = key_text(args)?;
    let key = ws.add_key(&raw)?;

    info!(fingerprint = key.fingerprint(), "added key");
    output::success(&format!("added {}", key));
    output::hint("run: envault reencrypt to grant access to existing environments");
    Ok(())
}

/// A single argument naming an existing file is read; otherwise the
/// arguments are the key itself, split by the shell.
fn key_text(args: &[String]) -> Result<String> {
    if let [single] = args {
        let path = Path::new(single);
        if path.is_file() {
            debug!(path = %path.display(), "reading public key file");
            return Ok(fs::read_to_string(path)?.trim().to_string());
        }
    }
    Ok(args.join(" "))
}
