use std::io;
use std::path::{Component, Path, PathBuf};

use derive_more::Display;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info, warn};

use super::line::strip_comment;
use super::{EntryKind, IndentMeasure, TreeEntry};
use crate::filesystem::Filesystem;

/// A filesystem effect produced by one entry of the drawing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Directive {
    #[display("create directory {}", _0.display())]
    CreateDirectory(PathBuf),
    #[display("create file {}", _0.display())]
    CreateFile(PathBuf),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display("{directories} directories, {files} files, {skipped} skipped")]
pub struct MaterializeSummary {
    pub directories: usize,
    pub files: usize,
    /// Lines that held only drawing glyphs and therefore no name.
    pub skipped: usize,
}

/// Chain of currently open ancestor directories.
///
/// The root is kept apart from the open directories and acts as the sentinel:
/// it sits below every entry, so popping never exposes an empty stack.
/// Indents in `open` strictly increase from bottom to top.
#[derive(Debug)]
struct PathStack {
    root: PathBuf,
    open: Vec<(PathBuf, usize)>,
}

impl PathStack {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            open: Vec::new(),
        }
    }

    /// Closes every directory at or below `indent` and returns the nearest
    /// remaining ancestor.
    fn parent_for(&mut self, indent: usize) -> &Path {
        while self.open.last().is_some_and(|(_, top)| *top >= indent) {
            self.open.pop();
        }
        self.open
            .last()
            .map(|(path, _)| path.as_path())
            .unwrap_or(self.root.as_path())
    }

    fn push(&mut self, path: PathBuf, indent: usize) {
        self.open.push((path, indent));
    }
}

/// Keeps only the plain components of an entry name so it always lands
/// beneath its parent. Root, prefix, `.` and `..` components are dropped.
fn contained_name(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Walks a tree drawing line by line and applies each entry to a
/// [`Filesystem`] as soon as it is parsed.
///
/// Entries are attached to the nearest preceding directory with a strictly
/// lower indent. An entry that jumps several levels deeper than any open
/// directory is therefore placed under the deepest one rather than rejected.
pub struct TreeBuilder<'fs, M, F> {
    measure: M,
    filesystem: &'fs mut F,
    stack: PathStack,
    summary: MaterializeSummary,
}

impl<'fs, M: IndentMeasure, F: Filesystem> TreeBuilder<'fs, M, F> {
    pub fn new(root: impl Into<PathBuf>, measure: M, filesystem: &'fs mut F) -> Self {
        Self {
            measure,
            filesystem,
            stack: PathStack::new(root.into()),
            summary: MaterializeSummary::default(),
        }
    }

    /// Runs every line through [`TreeBuilder::process_line`], stopping at the
    /// first failure. Entries created before the failure stay on disk.
    pub fn materialize<'a>(
        mut self,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<MaterializeSummary, MaterializeError> {
        for line in lines {
            self.process_line(line)?;
        }
        info!("Materialized tree: {}", self.summary());
        Ok(self.summary())
    }

    /// Applies a single line of the drawing.
    ///
    /// Returns `None` for lines that carry no entry: blank lines, comments
    /// and lines made only of drawing glyphs. Such lines leave the stack
    /// untouched.
    pub fn process_line(&mut self, line: &str) -> Result<Option<Directive>, MaterializeError> {
        let content = strip_comment(line);
        if content.is_empty() {
            return Ok(None);
        }

        let entry = TreeEntry::from_line(content, &self.measure);
        debug!(
            "Parsed line {:?} as {} {:?} at indent {}",
            line, entry.kind, entry.name, entry.indent
        );
        let name = contained_name(&entry.name);
        if name.as_os_str().is_empty() {
            warn!("Skipping line without an entry name: {:?}", line);
            self.summary.skipped += 1;
            return Ok(None);
        }
        if name.as_os_str() != entry.name.as_str() {
            debug!("Entry {:?} confined to {}", entry.name, name.display());
        }

        let path = self.stack.parent_for(entry.indent).join(name);
        let directive = match entry.kind {
            EntryKind::Directory => {
                self.filesystem
                    .create_dir_all(&path)
                    .context(CreateDirectorySnafu { path: path.clone() })?;
                self.stack.push(path.clone(), entry.indent);
                self.summary.directories += 1;
                Directive::CreateDirectory(path)
            }
            EntryKind::File => {
                self.filesystem
                    .create_empty_file(&path)
                    .context(CreateFileSnafu { path: path.clone() })?;
                self.summary.files += 1;
                Directive::CreateFile(path)
            }
        };
        debug!("Applied directive: {}", directive);

        Ok(Some(directive))
    }

    pub fn summary(&self) -> MaterializeSummary {
        self.summary
    }
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Failed to create directory {}", path.display()))]
    CreateDirectoryError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to create file {}", path.display()))]
    CreateFileError { path: PathBuf, source: io::Error },
}
