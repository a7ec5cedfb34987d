use std::path::PathBuf;

use crate::application::data::IndentStrategy;
use crate::cli::Cli;

const STDIN_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != STDIN_MARKER => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub input: InputSource,
    pub root: PathBuf,
    pub indent: IndentStrategy,
    pub dry_run: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input.into(),
            root: cli.root,
            indent: cli.indent,
            dry_run: cli.dry_run,
        }
    }
}
