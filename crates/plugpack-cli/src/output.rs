//! Human-readable console output with colors and styling.

use anyhow::Result;
use console::Term;
use console::style;
use plugpack_core::PackageReport;
use plugpack_core::ProgressCallback;
use std::io;
use std::path::Path;

pub struct HumanFormatter {
    use_colors: bool,
    term: Term,
    /// First failed write from a progress callback, which cannot return it.
    pending_error: Option<io::Error>,
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            pending_error: None,
        }
    }

    pub fn format_start(&self, archive: &Path) -> Result<()> {
        self.term
            .write_line(&format!("Creating {}...", archive.display()))?;
        Ok(())
    }

    pub fn format_result(&self, archive: &Path, report: &PackageReport) -> Result<()> {
        self.term.write_line("")?;

        if self.use_colors {
            self.term.write_line(&format!(
                "{} Successfully created {}",
                style("✓").green().bold(),
                archive.display()
            ))?;
        } else {
            self.term
                .write_line(&format!("Successfully created {}", archive.display()))?;
        }

        self.term
            .write_line(&format!("  Files added:      {}", report.files_added))?;
        self.term.write_line(&format!(
            "  Total size:       {}",
            format_size(report.bytes_read)
        ))?;
        self.term.write_line(&format!(
            "  Archive size:     {}",
            format_size(report.archive_size)
        ))?;
        if report.bytes_read > 0 {
            self.term.write_line(&format!(
                "  Compression:      {:.1}%",
                report.compression_percentage()
            ))?;
        }
        if report.files_skipped + report.directories_pruned > 0 {
            self.term.write_line(&format!(
                "  Excluded:         {} files, {} directories",
                report.files_skipped, report.directories_pruned
            ))?;
        }
        self.term.write_line(&format!(
            "  Duration:         {:.2?}",
            report.duration
        ))?;

        self.term
            .write_line("You can now install this file in OnlyOffice Desktop Editors.")?;

        Ok(())
    }

    /// Returns the first write error swallowed while reporting progress.
    pub fn take_pending_error(&mut self) -> Option<io::Error> {
        self.pending_error.take()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints each file as the archiver adds it.
impl ProgressCallback for HumanFormatter {
    fn on_entry_added(&mut self, name: &str, _size: u64) {
        if self.pending_error.is_some() {
            return;
        }
        if let Err(err) = self.term.write_line(&format!("  Adding: {name}")) {
            self.pending_error = Some(err);
        }
    }

    fn on_complete(&mut self) {}
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
