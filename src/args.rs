// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::OutputFormat;

/// File read when no path is given.
pub const DEFAULT_INPUT: &str = "Hamlet.txt";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "word_tally",
    version = crate::VERSION,
    about = "Count horatio, and, hamlet, god and all words of a text file in parallel"
)]
pub struct Args {
    /// Text file to scan (`-` reads standard input)
    #[arg(default_value = DEFAULT_INPUT, value_hint = ValueHint::FilePath)]
    pub path: PathBuf,

    /// Worker threads (default: available hardware parallelism)
    #[arg(short = 'j', long, help_heading = "Execution")]
    pub jobs: Option<usize>,

    /// Run every line task on the reading thread instead of a pool
    #[arg(long, conflicts_with = "jobs", help_heading = "Execution")]
    pub sequential: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}
