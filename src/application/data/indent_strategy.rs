use clap::ValueEnum;

use crate::tree::{GlyphCount, IndentMeasure, LeadingColumns};

/// Command-line choice of how nesting depth is read from a line.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum IndentStrategy {
    /// Count `│`, `├` and `└` glyphs
    #[default]
    Glyphs,
    /// Count the characters before the entry name
    Columns,
}

impl IndentMeasure for IndentStrategy {
    fn measure(&self, line: &str) -> usize {
        match self {
            IndentStrategy::Glyphs => GlyphCount.measure(line),
            IndentStrategy::Columns => LeadingColumns.measure(line),
        }
    }
}
