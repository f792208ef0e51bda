//! Positions of tokens in a document.

use oblique_foundation::{Error, ErrorContext};

/// Where a token sits in the document.
///
/// `start..end` is the byte range of the token. `line` and `column` are
/// 1-based and count characters, so they point at the token as an editor
/// would show it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset just past the last character.
    pub end: usize,
    /// Line of the first character.
    pub line: u32,
    /// Column of the first character.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Attaches this position to `err` unless it already names a column.
    ///
    /// Semantic errors from the graph builder only know their line; the
    /// parser uses this to point them at the token that caused them.
    #[must_use]
    pub fn locate(self, mut err: Error) -> Error {
        match err.context.take() {
            Some(context) if context.column.is_some() => err.with_context(context),
            context => {
                let context = context.unwrap_or_default();
                err.with_context(context.with_position(self.line, self.column))
            }
        }
    }
}
