//! Command-line interface for `gltform`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gltform_lib::ConfigStore;
use tracing::debug;

use crate::logging;

/// `gltform` - inspect and write the `.gltform` platform dotfile.
#[derive(Parser, Debug)]
#[command(name = "gltform")]
#[command(
    author,
    version,
    about = "Inspect and write the .gltform platform dotfile",
    long_about = None,
    after_help = "Reads search the working directory, then the home directory. Writes go to the working directory."
)]
pub struct Cli {
    /// Directory to search instead of the working and home directories (repeatable; the first one is also written to)
    #[arg(long = "dir", value_name = "DIR", global = true)]
    pub dirs: Vec<PathBuf>,

    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the config the next run would load
    Show,

    /// Write a config into the write directory
    Write(WriteArgs),

    /// List candidate paths in search order
    Paths,
}

#[derive(Args, Debug, Default)]
pub struct WriteArgs {
    /// Platform project identifier
    #[arg(long)]
    pub project_id: String,

    /// Base URL of the remote service
    #[arg(long)]
    pub rest_url: String,

    /// Space name (omitted from the file when empty)
    #[arg(long, default_value = "")]
    pub space_name: String,

    /// GLP workspace (omitted from the file when empty)
    #[arg(long, default_value = "")]
    pub glp_workspace: String,

    /// GLP role (omitted from the file when empty)
    #[arg(long, default_value = "")]
    pub glp_role: String,
}

impl Cli {
    /// Build the store the command operates on.
    ///
    /// # Errors
    ///
    /// Returns an error if no `--dir` was given and the working directory
    /// cannot be resolved.
    pub fn store(&self) -> gltform_lib::Result<ConfigStore> {
        self.dirs.first().map_or_else(ConfigStore::from_env, |first| {
            Ok(ConfigStore::new(self.dirs.clone(), first.clone()))
        })
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let store = cli.store()?;
    debug!(
        search_dirs = ?store.search_dirs(),
        write_dir = %store.write_dir().display(),
        "resolved config store"
    );
    match &cli.command {
        Commands::Show => commands::show::execute(&store, cli.json),
        Commands::Write(args) => commands::write::execute(&store, args, cli.json),
        Commands::Paths => commands::paths::execute(&store, cli.json),
    }
}
