//! Plugin packaging library.
//!
//! `plugpack-core` walks a plugin's source directory, prunes development
//! artifacts by basename, and writes every remaining file into a single
//! DEFLATE-compressed ZIP archive under its root-relative path.
//!
//! # Examples
//!
//! ```no_run
//! use plugpack_core::NoopProgress;
//! use plugpack_core::PackageConfig;
//! use plugpack_core::package_plugin;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackageConfig::default();
//! let report = package_plugin(".", &config, &mut NoopProgress)?;
//! println!("Packed {} files into {}", report.files_added, report.archive_path.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archiver;
pub mod config;
pub mod error;
pub mod filters;
pub mod report;
pub mod walker;

pub use archiver::package;
pub use archiver::package_plugin;
pub use archiver::package_with_progress;
pub use config::PackageConfig;
pub use error::PackagingError;
pub use error::Result;
pub use filters::ExclusionSet;
pub use report::NoopProgress;
pub use report::PackageReport;
pub use report::ProgressCallback;
pub use walker::ArchiveEntry;
pub use walker::PrunedWalker;
