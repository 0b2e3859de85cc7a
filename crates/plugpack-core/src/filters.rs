//! Basename exclusion and archive name computation.
//!
//! Exclusion is literal: a path is excluded when its final component equals
//! one of the configured names. There is no globbing, and a name excludes
//! matching entries at any depth, not only at the root.

use crate::PackagingError;
use crate::Result;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Component;
use std::path::Path;

/// A set of basenames that are never packaged.
///
/// A matching directory has its whole subtree skipped; a matching file is
/// skipped on its own.
///
/// # Examples
///
/// ```
/// use plugpack_core::ExclusionSet;
/// use std::path::Path;
///
/// let set = ExclusionSet::new([".git", "__pycache__"]);
/// assert!(set.is_excluded(Path::new("src/.git")));
/// assert!(!set.is_excluded(Path::new(".github")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Creates an exclusion set from a list of basenames.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a basename to the set.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Returns whether `name` is in the set.
    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.names.contains(name))
    }

    /// Returns whether the final component of `path` is excluded.
    ///
    /// Paths without a file name (such as `/` or `..`) are never excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.contains(name))
    }

    /// Number of names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the set holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Renders a root-relative path as a ZIP entry name.
///
/// Components are joined with `/` regardless of the host separator.
///
/// # Errors
///
/// Returns `InvalidEntryName` if a component is not valid UTF-8 or the path
/// is not a plain relative path.
///
/// # Examples
///
/// ```
/// use plugpack_core::filters::archive_name;
/// use std::path::Path;
///
/// assert_eq!(archive_name(Path::new("scripts/code.js")).unwrap(), "scripts/code.js");
/// ```
pub fn archive_name(relative: &Path) -> Result<String> {
    let invalid = || PackagingError::InvalidEntryName {
        path: relative.to_path_buf(),
    };

    let mut name = String::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            return Err(invalid());
        };
        if !name.is_empty() {
            name.push('/');
        }
        name.push_str(part.to_str().ok_or_else(invalid)?);
    }

    if name.is_empty() {
        return Err(invalid());
    }

    Ok(name)
}
