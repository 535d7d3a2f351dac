//! Error types for the news-eda library.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading or analysing a dataset.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error, with the path that was being accessed when known.
    #[error("I/O error{}", display_path(.path))]
    Io {
        /// Path being read or written
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV input (bad quoting, ragged rows, invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column required by the analysis is not present in the header.
    #[error("Missing column: {name}")]
    MissingColumn {
        /// Column name that was expected
        name: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

/// Convenience `Result` type alias for news-eda operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

impl Error {
    /// Creates an I/O error tagged with the path being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Creates a new missing-column error.
    pub fn missing_column<S: Into<String>>(name: S) -> Self {
        Error::MissingColumn { name: name.into() }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
