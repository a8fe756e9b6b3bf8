//! Common file system operations with unified error handling

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{self, Result};

/// Create a directory and all of its parents; an existing directory is fine
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| error::fs::create_dir_failed(path, e))
}

/// Read a file to a string, returning `None` when it does not exist
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(error::fs::read_failed(path, e)),
    }
}

/// Overwrite a file with the given content
pub fn write_string(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| error::fs::write_failed(path, e))
}
