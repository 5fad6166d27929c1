//! Error types for the tabnotes library

use std::io;

/// Library error type for tabnotes operations
#[derive(Debug, thiserror::Error)]
pub enum TabError {
    /// The tab file could not be opened for reading
    #[error("unable to open file {path}: {reason}")]
    FileOpenError { path: String, reason: String },

    /// A fret number was found on a line past the last string of the tuning
    #[error("too many strings: fret found on line {line} but the tuning has {strings} strings")]
    TooManyStringsError { line: usize, strings: usize },

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<io::Error> for TabError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}
