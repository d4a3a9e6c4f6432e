//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabcollate_model::{CleanOptions, DEFAULT_COL_SPARSENESS, DEFAULT_ROW_SPARSENESS};

#[derive(Parser)]
#[command(
    name = "tabcollate",
    version,
    about = "Clean folders of CSV tables and merge the ones that share a header",
    long_about = "Load every file in a folder as a comma-delimited table, drop sparse rows\n\
                  and columns, convert numeric text, detect each table's header row and\n\
                  merge tables whose headers match into one."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load, clean and merge every file in a folder.
    Load(LoadArgs),

    /// Clean a single file and show the result.
    Clean(CleanArgs),

    /// Find a file or folder beneath a root folder.
    Locate(LocateArgs),
}

/// Sparsity thresholds shared by `load` and `clean`.
#[derive(Args, Clone, Copy)]
pub struct ThresholdArgs {
    /// Drop columns whose share of empty cells is above this value.
    #[arg(long = "col-sparseness", value_name = "RATIO", default_value_t = DEFAULT_COL_SPARSENESS)]
    pub col_sparseness: f64,

    /// Drop rows whose share of empty cells is above this value.
    #[arg(long = "row-sparseness", value_name = "RATIO", default_value_t = DEFAULT_ROW_SPARSENESS)]
    pub row_sparseness: f64,
}

impl ThresholdArgs {
    pub fn clean_options(self) -> CleanOptions {
        CleanOptions::new()
            .with_col_sparseness(self.col_sparseness)
            .with_row_sparseness(self.row_sparseness)
    }
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Folder containing the files to load.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    /// Write every resulting table as CSV into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the merge report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// File to clean.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

#[derive(Parser)]
pub struct LocateArgs {
    /// Folder to search beneath.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// File name, folder name, or `/`-separated trailing folder names.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// What to look for.
    #[arg(long = "kind", value_enum, default_value = "file")]
    pub kind: LocateKindArg,

    /// Maximum number of folder levels to descend.
    #[arg(long = "max-depth", value_name = "LEVELS")]
    pub max_depth: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LocateKindArg {
    File,
    Dir,
    Subroot,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
