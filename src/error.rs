//! Centralized error types for mailstamp.

use std::path::PathBuf;
use thiserror::Error;

use crate::host::HostError;

/// All errors produced by the mailstamp library.
#[derive(Error, Debug)]
pub enum StampError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The project directory file could not be loaded or parsed.
    #[error("Failed to load project directory '{path}': {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    /// The project directory violates a structural invariant.
    #[error("Invalid project directory: {0}")]
    InvalidDirectory(String),

    /// A selection references a project code not present in the directory.
    #[error("Unknown project code: {0}")]
    ProjectNotFound(String),

    /// A selection references an email-type code not present in the directory.
    #[error("Unknown email type code: {0}")]
    EmailTypeNotFound(String),

    /// An essential apply stage (subject or body) failed at the host.
    #[error("Failed to {stage}: {source}")]
    FatalStage {
        stage: &'static str,
        source: HostError,
    },
}

/// Convenience alias for `Result<T, StampError>`.
pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

