// crates/core/src/presentation/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use confdiff_domain::CountBound;

use crate::config::OutputFormat;

/// Which classification to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Stanzas whose count lies in [--min, --max]
    Common,
    /// Lines unique to one device among stanzas seen at most --max times
    Diffs,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "confdiff",
    version = crate::VERSION,
    about = "Find the configuration shared by a fleet of devices, and what sets each one apart",
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Analysis mode
    #[arg(long, value_enum, default_value = "common", help_heading = "Analysis")]
    pub mode: ModeArg,

    /// Lower count bound for common mode: a number, `all` or `none` [default: all]
    #[arg(long, help_heading = "Analysis")]
    pub min: Option<CountBound>,

    /// Upper count bound: a number, `all` or `none` [default: all in common mode, 1 in diffs mode]
    #[arg(long, help_heading = "Analysis")]
    pub max: Option<CountBound>,

    /// Keyword whose line tail is masked before comparison (case-insensitive)
    #[arg(long, help_heading = "Analysis")]
    pub mask: Option<String>,

    /// File name patterns for directory inputs (comma separated / repeatable)
    #[arg(long, value_delimiter = ',', help_heading = "Input")]
    pub include: Vec<String>,

    /// Read additional inputs from a file, one per line
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub files_from: Option<PathBuf>,

    /// Also read hidden files in directory inputs
    #[arg(long, help_heading = "Input")]
    pub hidden: bool,

    /// Fail when any input cannot be loaded (default: warn and continue)
    #[arg(long, help_heading = "Input")]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Print each device's residual stanzas in diffs mode
    #[arg(long, help_heading = "Output")]
    pub residuals: bool,

    /// Print the `!!` comments found in the corpus
    #[arg(long, help_heading = "Output")]
    pub comments: bool,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,

    /// Configuration files or directories
    #[arg(value_hint = ValueHint::AnyPath, help_heading = "Input")]
    pub inputs: Vec<PathBuf>,
}
