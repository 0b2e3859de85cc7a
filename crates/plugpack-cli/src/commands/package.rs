//! Package command implementation.

use crate::error::convert_packaging_error;
use crate::output::HumanFormatter;
use anyhow::Result;
use plugpack_core::PackageConfig;
use plugpack_core::package_plugin;
use std::path::Path;

/// Packages the current directory with the fixed OnlyDys configuration.
pub fn execute(formatter: &mut HumanFormatter) -> Result<()> {
    let config = PackageConfig::default();
    let display_path = config.output_dir.join(&config.archive_name);

    formatter.format_start(&display_path)?;

    let report = package_plugin(Path::new("."), &config, formatter)
        .map_err(|e| convert_packaging_error(e, &display_path))?;

    if let Some(err) = formatter.take_pending_error() {
        return Err(err.into());
    }

    formatter.format_result(&display_path, &report)?;

    Ok(())
}
