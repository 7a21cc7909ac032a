//! Paths command implementation.

use std::path::PathBuf;

use anyhow::Result;
use gltform_lib::ConfigStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Candidate {
    path: PathBuf,
    exists: bool,
}

#[derive(Debug, Serialize)]
struct PathsOutput {
    candidates: Vec<Candidate>,
    write_path: PathBuf,
}

/// Execute the paths command.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub fn execute(store: &ConfigStore, json: bool) -> Result<()> {
    let output = PathsOutput {
        candidates: store
            .candidate_paths()
            .map(|path| Candidate {
                exists: path.is_file(),
                path,
            })
            .collect(),
        write_path: store.write_path(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (i, candidate) in output.candidates.iter().enumerate() {
        let state = if candidate.exists { "found" } else { "missing" };
        println!("{}. {} ({state})", i + 1, candidate.path.display());
    }
    println!("write: {}", output.write_path.display());
    Ok(())
}
