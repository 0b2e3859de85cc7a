//! Directory walking with basename pruning.
//!
//! Excluded directories are dropped before the walk descends into them, so
//! nothing beneath an excluded directory is ever listed or read, whatever the
//! names of the nested entries are.

use crate::PackagingError;
use crate::Result;
use crate::filters::ExclusionSet;
use crate::filters::archive_name;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use walkdir::DirEntry;
use walkdir::WalkDir;

/// A file selected for packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Filesystem path of the source file.
    pub path: PathBuf,

    /// Entry name inside the archive: root-relative, `/`-separated.
    pub archive_name: String,
}

/// Counters collected while walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories whose subtree was skipped.
    pub directories_pruned: usize,

    /// Files skipped because their basename is excluded.
    pub files_skipped: usize,
}

/// Depth-first, top-down walk of a plugin root that yields only the files to
/// package.
///
/// Symlinks are not followed for traversal. A symlink that resolves to a
/// regular file is yielded like a file (its target's bytes get packaged);
/// one that resolves to a directory is ignored. Entries within a directory
/// are visited in file name order.
///
/// # Examples
///
/// ```no_run
/// use plugpack_core::ExclusionSet;
/// use plugpack_core::PrunedWalker;
/// use std::path::Path;
///
/// let exclude = ExclusionSet::new([".git"]);
/// let mut walker = PrunedWalker::new(Path::new("./plugin"), &exclude);
/// for entry in &mut walker {
///     println!("{}", entry?.archive_name);
/// }
/// println!("pruned {} directories", walker.stats().directories_pruned);
/// # Ok::<(), plugpack_core::PackagingError>(())
/// ```
pub struct PrunedWalker<'a> {
    root: PathBuf,
    exclude: &'a ExclusionSet,
    inner: walkdir::IntoIter,
    stats: WalkStats,
}

impl<'a> PrunedWalker<'a> {
    /// Creates a walker over `root`. The root itself is never matched
    /// against the exclusion set.
    pub fn new(root: &Path, exclude: &'a ExclusionSet) -> Self {
        let inner = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Self {
            root: root.to_path_buf(),
            exclude,
            inner,
            stats: WalkStats::default(),
        }
    }

    /// Counters for what has been skipped so far.
    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    fn traversal_error(&self, err: walkdir::Error) -> PackagingError {
        let path = err.path().unwrap_or(self.root.as_path()).to_path_buf();
        PackagingError::Traversal { path, source: err }
    }

    fn build_entry(&self, dent: &DirEntry) -> Result<ArchiveEntry> {
        let relative = dent.path().strip_prefix(&self.root).map_err(|_| {
            PackagingError::InvalidEntryName {
                path: dent.path().to_path_buf(),
            }
        })?;

        Ok(ArchiveEntry {
            path: dent.path().to_path_buf(),
            archive_name: archive_name(relative)?,
        })
    }
}

impl Iterator for PrunedWalker<'_> {
    type Item = Result<ArchiveEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dent = match self.inner.next()? {
                Ok(dent) => dent,
                Err(err) => return Some(Err(self.traversal_error(err))),
            };

            if dent.depth() == 0 {
                continue;
            }

            let file_type = dent.file_type();

            if file_type.is_dir() {
                if self.exclude.is_excluded(dent.path()) {
                    debug!(path = %dent.path().display(), "pruning excluded directory");
                    self.inner.skip_current_dir();
                    self.stats.directories_pruned += 1;
                }
                continue;
            }

            if self.exclude.is_excluded(dent.path()) {
                debug!(path = %dent.path().display(), "skipping excluded file");
                self.stats.files_skipped += 1;
                continue;
            }

            if file_type.is_symlink() {
                // Broken links fall through and fail when the archiver opens them
                if std::fs::metadata(dent.path()).is_ok_and(|m| m.is_dir()) {
                    debug!(path = %dent.path().display(), "ignoring symlink to directory");
                    continue;
                }
            }

            return Some(self.build_entry(&dent));
        }
    }
}
