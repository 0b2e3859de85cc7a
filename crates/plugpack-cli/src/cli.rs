//! CLI argument parsing using clap.
//!
//! Packaging takes no arguments; clap only provides `--help` and
//! `--version`.

use clap::Parser;

#[derive(Parser)]
#[command(name = "plugpack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run from the plugin root. Set RUST_LOG=debug to see skipped paths.")]
pub struct Cli {}
