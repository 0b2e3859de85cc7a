//! Packaging configuration.

use crate::filters::ExclusionSet;
use std::path::Path;
use std::path::PathBuf;

/// Default archive file name.
pub const DEFAULT_ARCHIVE_NAME: &str = "OnlyDys.plugin";

/// Default output subdirectory, relative to the plugin root.
pub const DEFAULT_OUTPUT_DIR: &str = "deploy";

/// Development artifacts that never belong in a plugin archive.
pub const DEFAULT_EXCLUDES: [&str; 6] = [
    ".git",
    ".github",
    ".vscode",
    "package_plugin.py",
    "__pycache__",
    ".DS_Store",
];

/// Configuration for packaging a plugin directory.
///
/// # Examples
///
/// ```
/// use plugpack_core::PackageConfig;
/// use std::path::Path;
///
/// let config = PackageConfig::default();
/// assert_eq!(
///     config.archive_path(Path::new("plugin")),
///     Path::new("plugin/deploy/OnlyDys.plugin")
/// );
///
/// let custom = PackageConfig::default()
///     .with_archive_name("Other.plugin")
///     .with_output_dir("dist");
/// assert!(custom.exclusion_set().is_excluded(Path::new("dist")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    /// File name of the produced archive.
    ///
    /// Default: `OnlyDys.plugin`.
    pub archive_name: String,

    /// Directory the archive is written to, relative to the plugin root.
    ///
    /// Default: `deploy`.
    pub output_dir: PathBuf,

    /// Basenames skipped during the walk.
    ///
    /// Default: [`DEFAULT_EXCLUDES`].
    pub exclude_names: ExclusionSet,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            exclude_names: ExclusionSet::new(DEFAULT_EXCLUDES),
        }
    }
}

impl PackageConfig {
    /// Creates a new `PackageConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive file name.
    #[must_use]
    pub fn with_archive_name(mut self, name: impl Into<String>) -> Self {
        self.archive_name = name.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replaces the exclusion list.
    #[must_use]
    pub fn with_exclude_names(mut self, names: ExclusionSet) -> Self {
        self.exclude_names = names;
        self
    }

    /// Resolves the archive location under `root`.
    pub fn archive_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join(&self.archive_name)
    }

    /// Returns the exclusion set used for the walk.
    ///
    /// The archive name and the output directory's basename are always
    /// added so a re-run never packs its own output.
    pub fn exclusion_set(&self) -> ExclusionSet {
        let mut set = self.exclude_names.clone();
        set.insert(self.archive_name.clone());
        if let Some(dir_name) = self.output_dir.file_name().and_then(|n| n.to_str()) {
            set.insert(dir_name);
        }
        set
    }
}
