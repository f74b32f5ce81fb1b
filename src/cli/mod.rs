//! Command-line interface for har-atlas.
//!
//! Available commands:
//!
//! - **report**: assemble the atlas and print it (text or JSON) together
//!   with the diagnostics list
//! - **summary**: list the images that would be attached, per region and
//!   species
//!
//! ## Usage
//!
//! ```text
//! # Full report
//! har-atlas report annotations.csv scans/
//!
//! # JSON output for scripting
//! har-atlas report annotations.csv scans/ --format json
//!
//! # Which images map where, including skipped filenames
//! har-atlas summary annotations.csv scans/ --verbose
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod report;
pub mod summary;

#[derive(Parser)]
#[command(name = "har-atlas")]
#[command(version)]
#[command(about = "Reconcile HAR annotation tables with embryo image sets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output, including skipped image filenames
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble the atlas and print the full report
    Report(AtlasArgs),

    /// List the images attached per region and species
    Summary(AtlasArgs),
}

#[derive(Args)]
pub struct AtlasArgs {
    /// Path to the CSV annotation table
    pub har_csv: PathBuf,

    /// Top-level directory containing embryo images
    pub img_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
