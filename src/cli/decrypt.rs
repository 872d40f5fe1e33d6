//! Decrypt command - print an environment's plaintext.

use std::io::Write;

use crate::core::workspace::Workspace;
use crate::error::Result;

/// Write the decrypted bytes to stdout unchanged.
pub fn execute(ws: &Workspace, environment: &str) -> Result<()> {
    let plaintext = ws.decrypt(environment)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&plaintext)?;
    stdout.flush()?;
    Ok(())
}
