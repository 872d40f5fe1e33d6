//! Check command - verify the workspace is usable.
//!
//! Reports on the config, the authorized keys and every environment's
//! encrypted file, then fails if anything needs attention.

use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::workspace::Workspace;
use crate::error::{Error, Result};

/// Run all checks and print a report.
pub fn execute(ws: &Workspace) -> Result<()> {
    let config = Config::load(ws.root())?;
    let mut problems = 0;

    output::header("Checking envault configuration");

    match config.validate() {
        Ok(()) => output::check(true, "config.yaml is valid"),
        Err(e) => {
            output::check(false, &e.to_string());
            return Err(Error::Check { problems: 1 });
        }
    }

    match ws.keys() {
        Ok(keys) if keys.is_empty() => {
            problems += 1;
            output::check(false, "no authorized keys");
        }
        Ok(keys) => output::check(true, &format!("{} authorized key(s)", keys.len())),
        Err(e) => {
            problems += 1;
            output::check(false, &e.to_string());
        }
    }

    for (name, env) in &config.environments {
        output::blank();
        output::header(&format!("Environment: {}", name));

        if !ws.artifact_path(env).is_file() {
            problems += 1;
            output::check(
                false,
                &format!("encrypted file missing: {}", env.encrypted_file),
            );
            continue;
        }
        output::check(true, &format!("encrypted file: {}", env.encrypted_file));

        match ws.can_decrypt(name) {
            Ok(()) => output::check(true, "can decrypt"),
            Err(e) => {
                debug!(environment = %name, error = %e, "decrypt check failed");
                problems += 1;
                output::check(false, &format!("cannot decrypt: {}", e));
            }
        }

        for target in &env.targets {
            output::list_item(&format!("target: {}", output::path(&target.path)));
        }
    }

    output::blank();
    if problems > 0 {
        return Err(Error::Check { problems });
    }
    output::success("all checks passed");
    Ok(())
}
