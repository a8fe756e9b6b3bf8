//! Error types and handling for microblog
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`config`]: Site configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for microblog operations
#[derive(Error, Diagnostic, Debug)]
pub enum MicroblogError {
    // Configuration errors
    #[error("Microblog not configured.")]
    #[diagnostic(
        code(microblog::config::not_configured),
        help("Run 'microblog microblog:setup' first")
    )]
    NotConfigured,

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(microblog::config::parse_failed),
        help("Fix the YAML syntax in the site configuration")
    )]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(microblog::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(microblog::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(microblog::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(microblog::fs::io_error))]
    IoError { message: String },

    // Interactive input
    #[error("Failed to read input: {message}")]
    #[diagnostic(code(microblog::ui::prompt_failed))]
    PromptFailed { message: String },
}

impl From<std::io::Error> for MicroblogError {
    fn from(err: std::io::Error) -> Self {
        MicroblogError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for MicroblogError {
    fn from(err: inquire::InquireError) -> Self {
        MicroblogError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MicroblogError>;
