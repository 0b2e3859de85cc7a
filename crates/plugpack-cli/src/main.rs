//! plugpack CLI - packages the plugin in the current directory into
//! `deploy/OnlyDys.plugin`.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "plugpack=warn,plugpack_core=warn";

fn main() -> Result<()> {
    let _cli = cli::Cli::parse();

    init_tracing();

    let mut formatter = output::HumanFormatter::new();
    commands::package::execute(&mut formatter)
}

/// Diagnostics go to stderr so they never mix with the summary on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
