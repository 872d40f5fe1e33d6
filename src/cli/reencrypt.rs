//! Reencrypt command - apply the current key set to encrypted files.

use crate::cli::output;
use crate::core::workspace::Workspace;
use crate::error::{Error, Result};

/// Re-encrypt one environment, or every configured one.
pub fn execute(ws: &Workspace, environment: Option<&str>) -> Result<()> {
    if let Some(environment) = environment {
        ws.reencrypt(environment)?;
        output::success(&format!("re-encrypted {}", environment));
        return Ok(());
    }

    let report = ws.reencrypt_all()?;
    for name in &report.reencrypted {
        output::success(&format!("re-encrypted {}", name));
    }
    for (name, err) in &report.failed {
        output::error(&format!("{}: {}", name, err));
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(Error::Reencrypt {
            failed: report.failed.into_iter().map(|(name, _)| name).collect(),
        })
    }
}
