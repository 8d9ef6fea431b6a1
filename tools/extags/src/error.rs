//! Host-side errors.
//!
//! Scanning itself never fails. Everything here comes from the command
//! line or the file system.

use std::io;
use std::path::PathBuf;

use extags_scan::KindSpecError;

#[derive(Debug, thiserror::Error)]
pub enum TagsError {
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid kind spec: {0}")]
    KindSpec(#[from] KindSpecError),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' requires a value")]
    MissingValue(String),
    #[error("invalid value '{value}' for option '{option}'")]
    InvalidValue { option: String, value: String },
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),
    #[error("no input files specified")]
    NoInputs,
}

impl TagsError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TagsError::Io {
            path: path.into(),
            source,
        }
    }

    /// Errors caused by the command line rather than the file system.
    pub fn is_usage(&self) -> bool {
        !matches!(self, TagsError::Io { .. })
    }
}
