/// Command-line arguments.
use clap::{ArgAction, Parser};
use fileinspector_core::analysis::{JunkSet, DEFAULT_TOP_N};
use std::path::PathBuf;

/// Default cap on the file overview table.
pub const DEFAULT_OVERVIEW_ROWS: usize = 50;

/// Inspect a folder: file overview, extension statistics, duplicates and junk.
#[derive(Debug, Clone, Parser)]
#[command(name = "fileinspector", version, about)]
pub struct Cli {
    /// Folder to inspect.
    pub path: PathBuf,

    /// How many extensions to list in each ranking.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Extension treated as junk; repeat for several. Defaults to .tmp, .log and .bak.
    #[arg(long = "junk-ext", value_name = "EXT")]
    pub junk_ext: Vec<String>,

    /// Delete every junk file found.
    #[arg(long)]
    pub delete_junk: bool,

    /// Maximum number of rows in the file overview (0 hides it).
    #[arg(long, value_name = "N", default_value_t = DEFAULT_OVERVIEW_ROWS)]
    pub rows: usize,

    /// Write the full record table to a CSV file.
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Write the full record table to a JSON file.
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Debug log output on stderr (-v). Info is logged by default.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The junk set selected on the command line, or the default one.
    pub fn junk_set(&self) -> JunkSet {
        if self.junk_ext.is_empty() {
            JunkSet::default()
        } else {
            JunkSet::new(&self.junk_ext)
        }
    }

    /// Log level for the `verbose` count.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}
