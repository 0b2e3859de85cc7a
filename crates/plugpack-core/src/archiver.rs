//! Plugin archive creation.
//!
//! Every file that survives the exclusion walk is stored with DEFLATE
//! compression under its root-relative name. Directory entries are not
//! written; they are implied by the entry names.

use crate::PackagingError;
use crate::Result;
use crate::config::PackageConfig;
use crate::filters::ExclusionSet;
use crate::report::NoopProgress;
use crate::report::PackageReport;
use crate::report::ProgressCallback;
use crate::walker::ArchiveEntry;
use crate::walker::PrunedWalker;
use std::fs;
use std::fs::File;
use std::io::ErrorKind;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use tracing::info;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Packages `root` into a ZIP archive at `output`.
///
/// # Examples
///
/// ```no_run
/// use plugpack_core::ExclusionSet;
/// use plugpack_core::package;
///
/// let exclude = ExclusionSet::new([".git", "__pycache__"]);
/// let report = package("plugin", "dist/plugin.zip", &exclude)?;
/// println!("Added {} files", report.files_added);
/// # Ok::<(), plugpack_core::PackagingError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist or is not a directory
/// - The output directory or archive cannot be created
/// - A directory cannot be traversed or a file cannot be read
pub fn package<P: AsRef<Path>, Q: AsRef<Path>>(
    root: P,
    output: Q,
    exclude: &ExclusionSet,
) -> Result<PackageReport> {
    package_with_progress(root, output, exclude, &mut NoopProgress)
}

/// Packages `root` into a ZIP archive at `output`, reporting each added file
/// to `progress`.
///
/// The parent directory of `output` is created when missing and an existing
/// archive is overwritten. When `output` lies inside `root`, the archive
/// being written is skipped; other files sharing its name are still packed.
///
/// # Errors
///
/// Same as [`package`]. The first error aborts the run; the archive left
/// behind is incomplete.
pub fn package_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    root: P,
    output: Q,
    exclude: &ExclusionSet,
    progress: &mut dyn ProgressCallback,
) -> Result<PackageReport> {
    let root = root.as_ref();
    let output = output.as_ref();
    let start = Instant::now();

    check_root(root)?;
    let file = create_output(output)?;
    let own_archive =
        fs::canonicalize(output).map_err(|source| PackagingError::OutputCreation {
            path: output.to_path_buf(),
            source,
        })?;

    let mut report = PackageReport {
        archive_path: output.to_path_buf(),
        ..PackageReport::default()
    };

    let file = write_archive(
        file,
        root,
        exclude,
        Some(own_archive.as_path()),
        &mut report,
        progress,
    )?;

    report.archive_size = file.metadata()?.len();
    report.duration = start.elapsed();

    info!(
        archive = %output.display(),
        files = report.files_added,
        bytes = report.bytes_read,
        "plugin archive written"
    );
    progress.on_complete();

    Ok(report)
}

/// Packages `root` using `config`: the archive is written to
/// `root/<output_dir>/<archive_name>` and both of those names are excluded.
///
/// # Examples
///
/// ```no_run
/// use plugpack_core::NoopProgress;
/// use plugpack_core::PackageConfig;
/// use plugpack_core::package_plugin;
///
/// let report = package_plugin(".", &PackageConfig::default(), &mut NoopProgress)?;
/// assert!(report.archive_path.ends_with("deploy/OnlyDys.plugin"));
/// # Ok::<(), plugpack_core::PackagingError>(())
/// ```
///
/// # Errors
///
/// Same as [`package`].
pub fn package_plugin<P: AsRef<Path>>(
    root: P,
    config: &PackageConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<PackageReport> {
    let root = root.as_ref();
    let output = config.archive_path(root);
    package_with_progress(root, output, &config.exclusion_set(), progress)
}

fn check_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(PackagingError::RootNotDirectory {
            path: root.to_path_buf(),
        }),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(PackagingError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(PackagingError::Read {
            path: root.to_path_buf(),
            source,
        }),
    }
}

fn create_output(output: &Path) -> Result<File> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| PackagingError::OutputCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    File::create(output).map_err(|source| PackagingError::OutputCreation {
        path: output.to_path_buf(),
        source,
    })
}

/// Walks `root` and streams every selected file into a new archive on
/// `writer`. Returns the writer once the central directory is written.
///
/// `own_archive` is the canonical path of the file behind `writer`, if any.
fn write_archive<W: Write + Seek>(
    writer: W,
    root: &Path,
    exclude: &ExclusionSet,
    own_archive: Option<&Path>,
    report: &mut PackageReport,
    progress: &mut dyn ProgressCallback,
) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    let mut walker = PrunedWalker::new(root, exclude);
    for entry in &mut walker {
        let entry = entry?;
        if let Some(own) = own_archive
            && is_same_file(&entry.path, own)
        {
            debug!(path = %entry.path.display(), "skipping the archive being written");
            continue;
        }

        let size = add_file(&mut zip, &entry, options, &mut buffer)?;

        debug!(entry = %entry.archive_name, size, "added file");
        progress.on_entry_added(&entry.archive_name, size);

        report.files_added += 1;
        report.bytes_read += size;
    }

    let stats = walker.stats();
    report.directories_pruned = stats.directories_pruned;
    report.files_skipped = stats.files_skipped;

    Ok(zip.finish()?)
}

/// Compares the file name first so only same-named files get canonicalized.
fn is_same_file(path: &Path, canonical: &Path) -> bool {
    path.file_name() == canonical.file_name()
        && fs::canonicalize(path).is_ok_and(|p| p.as_path() == canonical)
}

/// Copies one file into the archive and returns the number of bytes read.
fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &ArchiveEntry,
    options: SimpleFileOptions,
    buffer: &mut [u8],
) -> Result<u64> {
    let read_error = |source| PackagingError::Read {
        path: entry.path.clone(),
        source,
    };

    let mut file = File::open(&entry.path).map_err(read_error)?;
    let metadata = file.metadata().map_err(read_error)?;

    let options = options.large_file(metadata.len() > u64::from(u32::MAX));
    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };

    zip.start_file(entry.archive_name.as_str(), options)?;

    let mut bytes_read = 0u64;
    loop {
        let n = match file.read(buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(read_error(err)),
        };
        zip.write_all(&buffer[..n])?;
        bytes_read += n as u64;
    }

    Ok(bytes_read)
}
