//! Write command implementation.

use anyhow::Result;
use gltform_lib::{ConfigFields, ConfigStore};

use crate::cli::WriteArgs;

impl From<&WriteArgs> for ConfigFields {
    fn from(args: &WriteArgs) -> Self {
        Self {
            space_name: args.space_name.clone(),
            project_id: args.project_id.clone(),
            rest_url: args.rest_url.clone(),
            glp_workspace: args.glp_workspace.clone(),
            glp_role: args.glp_role.clone(),
        }
    }
}

/// Execute the write command.
///
/// # Errors
///
/// Returns an error if the config cannot be encoded or written.
pub fn execute(store: &ConfigStore, args: &WriteArgs, json: bool) -> Result<()> {
    store.save(&ConfigFields::from(args))?;

    let path = store.write_path();
    if json {
        println!("{}", serde_json::json!({ "written": path }));
    } else {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
