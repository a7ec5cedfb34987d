//! Parser that turns an ASCII-art directory drawing into filesystem entries.
//!
//! Nesting is inferred per line by an [`IndentMeasure`]; the [`TreeBuilder`]
//! keeps a stack of open ancestor directories and resolves every entry's
//! parent against it in a single pass.

mod builder;
mod indent;
mod line;

pub use builder::{Directive, MaterializeError, MaterializeSummary, TreeBuilder};
pub use indent::{GlyphCount, IndentMeasure, LeadingColumns};
pub use line::{EntryKind, TreeEntry};
