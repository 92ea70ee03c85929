//! Flags shared by every subcommand, accepted before or after its name.

use clap::{ArgAction, Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More log output: -v info (saves, commits), -vv debug (every studio
    /// transition), -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors and requested JSON
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colours
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read configuration from FILE only, skipping the user and project files
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep bookmarks in FILE (forces the file backend)
    #[arg(long, global = true, value_name = "FILE")]
    pub bookmarks: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from config, else human on a terminal and plain when piped
    #[default]
    Auto,
    /// Coloured text
    Human,
    /// Text without colour
    Plain,
    /// One JSON document per command
    Json,
}
