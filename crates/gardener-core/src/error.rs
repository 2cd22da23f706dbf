//! Error types for the seeder library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all seeder operations.
#[derive(Error, Debug)]
pub enum SeederError {
    /// File system errors while reading or writing the data file
    #[error("File system error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The data file does not parse into the expected document shape
    #[error("Malformed data file '{path}': {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialization errors while writing the document
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Data file already present where a fresh one was requested
    #[error("Data file already exists at '{path}'")]
    AlreadyExists { path: PathBuf },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

impl SeederError {
    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SeederError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for mapping I/O results with path context.
pub trait IoResultExt<T> {
    /// Attach the offending path to an I/O error.
    fn io_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn io_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| SeederError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Extension trait for mapping JSON parse results with path context.
pub trait FormatResultExt<T> {
    /// Attach the data file path to a parse error.
    fn format_context(self, path: &Path) -> Result<T>;
}

impl<T> FormatResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn format_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| SeederError::Format {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for seeder operations
pub type Result<T> = std::result::Result<T, SeederError>;
