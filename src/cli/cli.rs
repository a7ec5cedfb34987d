use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{IndentStrategy, LogLevel};

/// Create the directories and empty files described by a tree drawing.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File containing the tree drawing; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Directory under which the tree is created
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// How nesting depth is read from each line
    #[clap(long, short, default_value = "glyphs", value_enum)]
    pub indent: IndentStrategy,

    /// Print what would be created without touching the filesystem
    #[clap(long, short = 'n')]
    pub dry_run: bool,
}
