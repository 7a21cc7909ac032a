//! Error types for `gltform-lib`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Primary error type for dotfile operations.
#[derive(Error, Debug)]
pub enum GltformError {
    // === Read Path ===
    /// No dotfile exists at the path that was tried.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The store was built with an empty candidate list.
    #[error("No candidate directories to search for the config file")]
    NoCandidates,

    /// File content could not be decoded into the record shape.
    #[error("Config parse error{}: {source}", location(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        source: serde_yaml::Error,
    },

    // === Write Path ===
    /// The in-memory record could not be encoded.
    #[error("Config serialization error: {0}")]
    Serialization(#[source] serde_yaml::Error),

    /// Caller-supplied field map is missing a key or holds a non-string value.
    #[error("Contract violation: {field}: {reason}")]
    ContractViolation { field: String, reason: String },

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn location(path: Option<&Path>) -> String {
    path.map_or_else(String::new, |p| format!(" in {}", p.display()))
}

impl GltformError {
    #[must_use]
    pub fn contract(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ContractViolation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Attach the file path to a parse error that was raised from a bare stream.
    #[must_use]
    pub fn at_path(self, at: &Path) -> Self {
        match self {
            Self::Parse { path: None, source } => Self::Parse {
                path: Some(at.to_path_buf()),
                source,
            },
            other => other,
        }
    }

    /// True for the error a candidate directory yields when it has no dotfile.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type using `GltformError`.
pub type Result<T> = std::result::Result<T, GltformError>;
