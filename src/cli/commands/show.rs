//! Show command implementation.

use std::path::PathBuf;

use anyhow::Result;
use gltform_lib::{ConfigRecord, ConfigStore};
use serde::Serialize;
use tracing::trace;

const REDACTED: &str = "(redacted)";

#[derive(Debug, Serialize)]
struct ShowOutput {
    source: PathBuf,
    config: ConfigRecord,
}

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if no candidate yields a valid config.
pub fn execute(store: &ConfigStore, json: bool) -> Result<()> {
    let (source, mut config) = store.load_with_source()?;
    if !config.access_token.is_empty() {
        trace!("redacting access_token");
        config.access_token = REDACTED.to_string();
    }

    if json {
        let output = serde_json::to_string_pretty(&ShowOutput { source, config })?;
        println!("{output}");
        return Ok(());
    }

    println!("source: {}", source.display());
    for (key, value) in fields(&config) {
        println!("{key}: {value}");
    }
    Ok(())
}

fn fields(config: &ConfigRecord) -> [(&'static str, &str); 6] {
    [
        ("project_id", config.project_id.as_str()),
        ("rest_url", config.rest_url.as_str()),
        ("space_name", config.space_name.as_str()),
        ("glp_workspace", config.glp_workspace.as_str()),
        ("glp_role", config.glp_role.as_str()),
        ("access_token", config.access_token.as_str()),
    ]
}
