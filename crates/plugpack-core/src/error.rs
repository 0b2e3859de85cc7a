//! Error types for plugin packaging.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackagingError`.
pub type Result<T> = std::result::Result<T, PackagingError>;

/// Errors that can occur while packaging a plugin.
///
/// Every variant is fatal: the first error aborts the run and the partially
/// written archive is not considered valid.
#[derive(Error, Debug)]
pub enum PackagingError {
    /// The root directory does not exist.
    #[error("source directory not found: {path}")]
    RootNotFound {
        /// The missing root path.
        path: PathBuf,
    },

    /// The root path exists but is not a directory.
    #[error("source path is not a directory: {path}")]
    RootNotDirectory {
        /// The offending root path.
        path: PathBuf,
    },

    /// The output directory or archive file could not be created.
    #[error("cannot create output {path}: {source}")]
    OutputCreation {
        /// Directory or archive path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed (unreadable directory, vanished entry).
    #[error("cannot traverse {path}: {source}")]
    Traversal {
        /// Path at which the walk failed.
        path: PathBuf,
        /// Underlying walkdir error.
        #[source]
        source: walkdir::Error,
    },

    /// A source file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A relative path cannot be stored as a ZIP entry name.
    #[error("path is not valid UTF-8: {path}")]
    InvalidEntryName {
        /// The relative path that could not be converted.
        path: PathBuf,
    },

    /// The ZIP writer rejected an operation.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
