//! File system errors

use std::path::Path;

use super::MicroblogError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> MicroblogError {
    MicroblogError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> MicroblogError {
    MicroblogError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a directory creation error
pub fn create_dir_failed(path: &Path, reason: impl ToString) -> MicroblogError {
    MicroblogError::CreateDirFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
