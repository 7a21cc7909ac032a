//! YAML encoding of the dotfile and its file I/O.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{GltformError, Result};
use crate::model::ConfigRecord;

/// Parse a dotfile from a byte stream.
///
/// # Errors
///
/// Returns `Io` if the stream cannot be read, or `Parse` if its contents are
/// not a valid record.
pub fn parse<R: Read>(mut reader: R) -> Result<ConfigRecord> {
    let mut contents = Vec::new();
    reader.read_to_end(&mut contents)?;
    parse_bytes(&contents)
}

/// Parse a dotfile already held in memory.
///
/// Whitespace-only input is an empty record.
///
/// # Errors
///
/// Returns `Parse` if the bytes are not a valid record.
pub fn parse_bytes(contents: &[u8]) -> Result<ConfigRecord> {
    if contents.iter().all(u8::is_ascii_whitespace) {
        return Ok(ConfigRecord::default());
    }
    serde_yaml::from_slice(contents).map_err(|source| GltformError::Parse { path: None, source })
}

/// Encode a record as dotfile text. Empty optional fields are omitted.
///
/// # Errors
///
/// Returns `Serialization` if the record cannot be encoded.
pub fn encode(record: &ConfigRecord) -> Result<String> {
    serde_yaml::to_string(record).map_err(GltformError::Serialization)
}

/// Open and parse the dotfile at `path`.
///
/// # Errors
///
/// Returns `NotFound` if no file exists at `path`, `Io` for other open or
/// read failures, and `Parse` (carrying `path`) for malformed contents.
pub fn read_config(path: &Path) -> Result<ConfigRecord> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            GltformError::NotFound(path.to_path_buf())
        } else {
            GltformError::Io(e)
        }
    })?;
    parse(file).map_err(|e| e.at_path(path))
}

/// Create or truncate `path`, write `bytes`, and sync to disk before returning.
///
/// # Errors
///
/// Returns `Io` if the file cannot be created, written, or synced.
pub fn write_config(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
