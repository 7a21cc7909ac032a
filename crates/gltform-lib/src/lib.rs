//! `gltform-lib` — the `.gltform` platform dotfile.
//!
//! The dotfile records the project and service URL an infrastructure tool
//! last worked against. It is read from the working directory or, failing
//! that, the home directory, and always written to the working directory.
//!
//! # Quick Start
//!
//! ```no_run
//! use gltform_lib::{ConfigFields, ConfigStore};
//!
//! let store = ConfigStore::from_env().unwrap();
//!
//! // Write
//! store.save(&ConfigFields::new("proj-1", "https://api.example.com")).unwrap();
//!
//! // Read back
//! let record = store.load().unwrap();
//! assert_eq!(record.project_id, "proj-1");
//! ```

pub mod codec;
pub mod error;
pub mod model;
pub mod store;

pub use error::{GltformError, Result};
pub use model::{ConfigFields, ConfigRecord};
pub use store::{CONFIG_FILE_NAME, ConfigStore};

/// Load the dotfile from the working directory or the home directory.
///
/// # Errors
///
/// See [`ConfigStore::from_env`] and [`ConfigStore::load`].
pub fn load() -> Result<ConfigRecord> {
    ConfigStore::from_env()?.load()
}

/// Write the dotfile into the working directory.
///
/// # Errors
///
/// See [`ConfigStore::from_env`] and [`ConfigStore::save`].
pub fn save(fields: &ConfigFields) -> Result<()> {
    ConfigStore::from_env()?.save(fields)
}
