use clap::Parser;
use std::path::PathBuf;

use super::types::{OutputFormatArg, PreviewArg};

/// Rename numbered files so their numeric parts share a zero-padded width
#[derive(Parser, Debug)]
#[command(name = "zeropad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target directory. Defaults to the current directory
    pub path: Option<PathBuf>,

    /// Print the plan without renaming anything
    #[arg(long)]
    pub dry_run: bool,

    /// Literal replacement applied to target names, like from=to
    #[arg(long, value_name = "FROM=TO")]
    pub replace: Vec<String>,

    /// Pad every numbered file, not just the majority extension
    #[arg(long)]
    pub all_extensions: bool,

    /// Preview format used with --dry-run
    #[arg(long, value_enum, default_value = "list")]
    pub preview: PreviewArg,

    /// Output format for machine consumption
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormatArg,

    /// Suppress the human-readable summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}
