//! Error types for loading snapshots and options.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a snapshot or an options file.
///
/// Rendering itself never fails; these only cover the file and parsing
/// boundary in front of it.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML options were malformed.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON input was malformed or had the wrong shape (e.g. seven vertices).
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name a supported format.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Read a file to a string, tagging failures with the path.
pub(crate) fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
