use super::line::{CONNECTOR_GLYPHS, is_drawing_glyph};

/// Derives the nesting depth of a single drawing line.
///
/// Only the relative order of the returned values matters to the builder,
/// so implementations are free to pick their own scale.
pub trait IndentMeasure {
    fn measure(&self, line: &str) -> usize;
}

/// Counts the connector glyphs (`│`, `├`, `└`) anywhere in the line.
///
/// Assumes the drawing repeats one connector per ancestor level.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphCount;

impl IndentMeasure for GlyphCount {
    fn measure(&self, line: &str) -> usize {
        line.chars().filter(|c| CONNECTOR_GLYPHS.contains(c)).count()
    }
}

/// Counts the characters that precede the entry name, glyphs and whitespace
/// alike.
///
/// Unlike [`GlyphCount`] this keeps its depth when an ancestor's `│` has been
/// replaced by spaces because that ancestor was the last child.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingColumns;

impl IndentMeasure for LeadingColumns {
    fn measure(&self, line: &str) -> usize {
        line.chars()
            .take_while(|c| c.is_whitespace() || is_drawing_glyph(*c))
            .count()
    }
}
