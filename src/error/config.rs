//! Configuration errors

use super::MicroblogError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> MicroblogError {
    MicroblogError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

