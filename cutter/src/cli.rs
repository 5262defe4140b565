//! Command-line flags.

use std::path::PathBuf;

use clap::{Command, CommandFactory, FromArgMatches, Parser};

use crate::config::defaults::settings_help;

/// Crop sewing-pattern scans into tiles, grid overlays, print pages and PDFs.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pattern-cutter", version, about, long_about = None)]
pub struct Cli {
    /// Also write each tile centered on an A4 page (`<n>_print.png`).
    #[arg(long)]
    pub print: bool,

    /// Overlay the reference grid (`<n>_grid.png`).
    #[arg(long)]
    pub grid: bool,

    /// After cutting, merge each output folder's print pages into a PDF.
    #[arg(long)]
    pub pdf: bool,

    /// Cut sheet to read [default: cuts.txt]
    #[arg(long, value_name = "FILE")]
    pub cuts: Option<PathBuf>,

    /// Directory header image names are relative to [default: input]
    #[arg(long, value_name = "DIR")]
    pub input_root: Option<PathBuf>,

    /// Output root [default: output]
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Directory holding the grid assets [default: assets]
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Cuts past the image edge: pad or reject [default: pad]
    #[arg(long, value_name = "POLICY")]
    pub bounds: Option<String>,

    /// Write the batch report as JSON.
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Parse the process arguments; `--help` also lists the environment settings.
    pub fn parse_with_settings() -> Self {
        let matches = command_with_settings().get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

fn command_with_settings() -> Command {
    Cli::command().after_help(settings_help())
}
