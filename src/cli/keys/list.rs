//! List-keys command.

use crate::cli::output;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// List authorized keys.
pub fn execute(ws: &Workspace, json: bool) -> Result<()> {
    let keys = ws.keys()?;

    if json {
        let keys_json: Vec<_> = keys
            .iter()
            .map(|k| {
                serde_json::json!({
                    "fingerprint": k.fingerprint(),
                    "type": k.key_type(),
                    "comment": k.comment(),
                })
            })
            .collect();

        let result = serde_json::json!({
            "keys": keys_json,
            "count": keys.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if keys.is_empty() {
        output::dimmed("no authorized keys");
    } else {
        output::header(&format!("{} authorized keys", output::count(keys.len())));
        output::rule();
        for key in &keys {
            output::list_item(&key.to_string());
        }
    }

    Ok(())
}
