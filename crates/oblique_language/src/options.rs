//! Configuration for parsing.

use crate::context::ContextMode;

/// Configuration for a parse.
///
/// Controls source preprocessing, context inheritance and error labelling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Strip the leading whitespace common to all non-blank lines first.
    pub dedent: bool,

    /// Whether context frames extend their parent frame.
    pub context_mode: ContextMode,

    /// Document name attached to errors.
    pub source_name: Option<String>,
}

impl ParseOptions {
    /// Creates the default configuration: nested context, no dedent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with cumulative context frames.
    #[must_use]
    pub fn cumulative() -> Self {
        Self {
            context_mode: ContextMode::Cumulative,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable dedenting.
    #[must_use]
    pub fn with_dedent(mut self, dedent: bool) -> Self {
        self.dedent = dedent;
        self
    }

    /// Builder method to enable/disable cumulative context frames.
    #[must_use]
    pub fn with_cumulative_context(mut self, cumulative: bool) -> Self {
        self.context_mode = if cumulative {
            ContextMode::Cumulative
        } else {
            ContextMode::Nested
        };
        self
    }

    /// Builder method to set the document name used in errors.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}
