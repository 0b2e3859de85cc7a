//! Error conversion utilities for CLI.
//!
//! Converts plugpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use plugpack_core::PackagingError;
use std::path::Path;

/// Converts `PackagingError` to a user-friendly anyhow error with context.
pub fn convert_packaging_error(err: PackagingError, archive: &Path) -> anyhow::Error {
    match err {
        PackagingError::RootNotFound { path } => anyhow!(
            "Plugin directory not found: {}\n\
             HINT: Run plugpack from the plugin's root directory.",
            path.display()
        ),
        PackagingError::RootNotDirectory { path } => anyhow!(
            "Plugin root is not a directory: {}",
            path.display()
        ),
        PackagingError::OutputCreation { path, source } => anyhow!(
            "Cannot create '{}' while writing '{}': {}\n\
             HINT: Check write permissions and free disk space.",
            path.display(),
            archive.display(),
            source
        ),
        PackagingError::Traversal { path, source } => anyhow!(
            "Cannot read directory '{}': {}\n\
             HINT: Files may have changed during packaging. Re-run once they are stable.",
            path.display(),
            source
        ),
        PackagingError::Read { path, source } => anyhow!(
            "Cannot read '{}': {}\n\
             HINT: Files may have changed during packaging. '{}' is incomplete; re-run to rebuild it.",
            path.display(),
            source,
            archive.display()
        ),
        PackagingError::InvalidEntryName { path } => anyhow!(
            "Cannot store '{}' in the archive: file names must be valid UTF-8\n\
             HINT: Rename the file or add its name to the exclusion list.",
            path.display()
        ),
        _ => anyhow::Error::from(err)
            .context(format!("Error writing archive '{}'", archive.display())),
    }
}
