//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for scripthost using clap's derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Scripthost - a batch runner for JavaScript directories
#[derive(Parser)]
#[command(name = "scripthost")]
#[command(version)]
#[command(
    about = "Runs every JavaScript file in a directory on an embedded V8 engine",
    long_about = None
)]
pub struct Cli {
    /// Directory to scan for .js scripts (overrides the configured directory)
    pub dir: Option<PathBuf>,

    /// Evaluate a single snippet and print its completion value instead of
    /// scanning a directory
    #[arg(long, short = 'e', value_name = "CODE")]
    pub eval: Option<String>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub sample_config: bool,
}
