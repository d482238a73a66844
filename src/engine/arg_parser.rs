use clap::Parser;
use std::path::PathBuf;

use crate::utils::LogLevel;

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
}

/// Flatten a directory tree into a single directory.
#[derive(Clone, Parser)]
#[command(name = "flatdir")]
#[command(about = "Copy every file under SOURCE into TARGET, dropping the directory structure.")]
pub struct Cli {
    /// Directory to walk. Default: current directory.
    #[arg(value_name = "SOURCE", default_value = DefaultArgs::DIR)]
    pub source: PathBuf,

    /// Directory to copy into. Default: `target` from `.flatdir.toml`, else current directory.
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Deepest level to descend (SOURCE itself is 0). Negative finds nothing.
    #[arg(long, short = 'd', allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Exclude patterns (glob syntax), matched at any depth. Can specify multiple: -e pattern1 pattern2
    #[arg(long, short = 'e', num_args = 1..)]
    pub exclude: Vec<String>,

    /// Acknowledge that excludes also match dotfiles (silences the warning).
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub dot: Option<bool>,

    /// Print what would be copied; copy nothing.
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Verbose output (same as --log-level debug).
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Log level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}
