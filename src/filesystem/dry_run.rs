use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use supports_color::Stream;

use super::Filesystem;

/// Writes the commands that would materialize the tree instead of running them.
pub struct DryRunFilesystem<W: Write> {
    out: W,
    color: bool,
}

impl DryRunFilesystem<io::Stdout> {
    pub fn stdout() -> Self {
        let color = supports_color::on(Stream::Stdout).is_some();
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> DryRunFilesystem<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    fn emit(&mut self, command: &str, path: &Path) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{} {}", command.green().bold(), path.display())
        } else {
            writeln!(self.out, "{} {}", command, path.display())
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Filesystem for DryRunFilesystem<W> {
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        self.emit("mkdir -p", path)
    }

    fn create_empty_file(&mut self, path: &Path) -> io::Result<()> {
        self.emit("touch", path)
    }
}
