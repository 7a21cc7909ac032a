//! Dotfile location and persistence.
//!
//! Reads search an ordered list of candidate directories and stop at the
//! first one holding a readable, well-formed `.gltform`. Writes always go to a
//! single directory.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::codec;
use crate::error::{GltformError, Result};
use crate::model::{ConfigFields, ConfigRecord};

/// Fixed name of the dotfile, for both reads and writes.
pub const CONFIG_FILE_NAME: &str = ".gltform";

/// Reads and writes the dotfile in explicitly configured directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    search_dirs: Vec<PathBuf>,
    write_dir: PathBuf,
}

impl ConfigStore {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a store searching `search_dirs` in order and writing into `write_dir`.
    #[must_use]
    pub fn new(search_dirs: Vec<PathBuf>, write_dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dirs,
            write_dir: write_dir.into(),
        }
    }

    /// Search the working directory, then the home directory; write to the working directory.
    #[must_use]
    pub fn in_dirs(working_dir: impl Into<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        let mut search_dirs = vec![working_dir.clone()];
        search_dirs.extend(home_dir);
        Self::new(search_dirs, working_dir)
    }

    /// Build the store from the process working directory and the user's home.
    ///
    /// A home directory that cannot be resolved is left out of the search.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the current working directory cannot be determined.
    pub fn from_env() -> Result<Self> {
        let working_dir = std::env::current_dir()?;
        let home_dir = dirs::home_dir();
        if home_dir.is_none() {
            debug!("home directory unavailable; searching working directory only");
        }
        Ok(Self::in_dirs(working_dir, home_dir))
    }

    // ========================================================================
    // Paths
    // ========================================================================

    #[must_use]
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    #[must_use]
    pub fn write_dir(&self) -> &Path {
        &self.write_dir
    }

    /// Dotfile paths tried by [`Self::load`], in order.
    pub fn candidate_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.search_dirs.iter().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Dotfile path written by [`Self::save`].
    #[must_use]
    pub fn write_path(&self) -> PathBuf {
        self.write_dir.join(CONFIG_FILE_NAME)
    }

    // ========================================================================
    // Read
    // ========================================================================

    /// Load the first readable, well-formed dotfile among the candidates.
    ///
    /// # Errors
    ///
    /// Returns `NoCandidates` when there is nothing to search. Otherwise, if
    /// every candidate fails, returns the error from the last candidate tried
    /// (`NotFound`, `Io`, or `Parse`).
    pub fn load(&self) -> Result<ConfigRecord> {
        self.load_with_source().map(|(_, record)| record)
    }

    /// Like [`Self::load`], also returning the path the record came from.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_source(&self) -> Result<(PathBuf, ConfigRecord)> {
        let mut last_err = GltformError::NoCandidates;

        for path in self.candidate_paths() {
            match codec::read_config(&path) {
                Ok(record) => {
                    debug!(path = %path.display(), "loaded config");
                    return Ok((path, record));
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "config candidate rejected");
                    last_err = e;
                }
            }
        }

        Err(last_err)
    }

    // ========================================================================
    // Write
    // ========================================================================

    /// Write `fields` to the dotfile in the write directory, synced to disk.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the record cannot be encoded, or `Io` if the
    /// file cannot be created, written, or synced.
    pub fn save(&self, fields: &ConfigFields) -> Result<()> {
        let record = ConfigRecord::from(fields);
        let text = codec::encode(&record)?;
        let path = self.write_path();

        trace!(path = %path.display(), bytes = text.len(), "writing config");
        codec::write_config(&path, text.as_bytes())?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validate a loosely-typed field map, then [`Self::save`] it.
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation` if a recognized key is missing or not a
    /// string; nothing is written in that case. Otherwise as [`Self::save`].
    pub fn save_untyped(&self, fields: &Map<String, Value>) -> Result<()> {
        let fields = ConfigFields::from_untyped(fields)?;
        self.save(&fields)
    }
}
