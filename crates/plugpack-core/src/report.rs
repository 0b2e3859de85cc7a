//! Packaging report and progress callbacks.

use std::path::PathBuf;
use std::time::Duration;

/// Report of a successful packaging run.
///
/// # Examples
///
/// ```
/// use plugpack_core::PackageReport;
///
/// let mut report = PackageReport::default();
/// report.bytes_read = 1000;
/// report.archive_size = 250;
///
/// assert_eq!(report.compression_percentage(), 75.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageReport {
    /// Location of the written archive.
    pub archive_path: PathBuf,

    /// Number of files added to the archive.
    pub files_added: usize,

    /// Directories skipped along with their whole subtree.
    pub directories_pruned: usize,

    /// Files skipped because their name is excluded.
    pub files_skipped: usize,

    /// Total uncompressed bytes read from source files.
    pub bytes_read: u64,

    /// Size of the finished archive on disk.
    pub archive_size: u64,

    /// Duration of the packaging run.
    pub duration: Duration,
}

impl PackageReport {
    /// Space saved as a percentage of the uncompressed size. Returns 0.0 when
    /// nothing was read or the archive is larger than its input.
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_read == 0 || self.archive_size >= self.bytes_read {
            return 0.0;
        }
        (1.0 - self.archive_size as f64 / self.bytes_read as f64) * 100.0
    }
}

/// Receives progress notices while an archive is being written.
///
/// # Examples
///
/// ```
/// use plugpack_core::ProgressCallback;
///
/// struct Printer;
///
/// impl ProgressCallback for Printer {
///     fn on_entry_added(&mut self, name: &str, size: u64) {
///         println!("  Adding: {name} ({size} bytes)");
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback {
    /// Called after a file has been fully written to the archive.
    ///
    /// # Arguments
    ///
    /// * `name` - Archive entry name
    /// * `size` - Uncompressed size in bytes
    fn on_entry_added(&mut self, name: &str, size: u64);

    /// Called once after the archive has been finished.
    fn on_complete(&mut self);
}

/// `ProgressCallback` that ignores every notice.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_added(&mut self, _name: &str, _size: u64) {}

    fn on_complete(&mut self) {}
}
