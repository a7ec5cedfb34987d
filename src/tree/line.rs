use derive_more::Display;

use super::IndentMeasure;

/// Glyphs that repeat once per ancestor level in conventional tree output.
pub(super) const CONNECTOR_GLYPHS: [char; 3] = ['│', '├', '└'];
const HORIZONTAL_GLYPH: char = '─';

const COMMENT_MARKER: char = '#';
const DIRECTORY_MARKER: char = '/';
const EMPHASIS_MARKER: char = '*';

pub(super) fn is_drawing_glyph(c: char) -> bool {
    c == HORIZONTAL_GLYPH || CONNECTOR_GLYPHS.contains(&c)
}

/// Drops everything from the first `#` onwards along with trailing whitespace.
pub(super) fn strip_comment(line: &str) -> &str {
    let content = match line.find(COMMENT_MARKER) {
        Some(index) => &line[..index],
        None => line,
    };
    content.trim_end()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

/// One tree entry as read from a single line of the drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub kind: EntryKind,
    pub indent: usize,
}

impl TreeEntry {
    /// Interprets an already comment-stripped line.
    ///
    /// The returned name may be empty when the line held nothing but glyphs.
    pub fn from_line(content: &str, measure: &impl IndentMeasure) -> Self {
        let indent = measure.measure(content);
        let (name, kind) = extract_name(content);
        Self { name, kind, indent }
    }
}

/// Removes the drawing glyphs and the trailing `/` and `*` markers.
///
/// At most one marker of each kind is removed. They are accepted in either
/// order so `docs/*` and `docs*/` both name the directory `docs`.
fn extract_name(content: &str) -> (String, EntryKind) {
    let stripped: String = content.chars().filter(|c| !is_drawing_glyph(*c)).collect();
    let name = stripped.trim();
    let name = name.strip_suffix(EMPHASIS_MARKER).unwrap_or(name);
    let (name, kind) = match name.strip_suffix(DIRECTORY_MARKER) {
        Some(dir) => (
            dir.strip_suffix(EMPHASIS_MARKER).unwrap_or(dir),
            EntryKind::Directory,
        ),
        None => (name, EntryKind::File),
    };
    (name.trim_end().to_string(), kind)
}
