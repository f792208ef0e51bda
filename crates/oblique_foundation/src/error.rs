//! Error types for the Oblique system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every failure is fatal to the parse that produced it.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::reference::Ref;

/// The main error type for Oblique operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, replacing any existing context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Sets the source name on this error, keeping any position already attached.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Creates a lexical error.
    #[must_use]
    pub fn lex(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::Lex {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates a syntax error for an offending token.
    #[must_use]
    pub fn syntax(
        message: impl Into<String>,
        found: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            found: found.into(),
            line,
            column,
        })
    }

    /// Creates a duplicate object error.
    #[must_use]
    pub fn duplicate_object(id: Ref) -> Self {
        Self::new(ErrorKind::DuplicateObject(id))
    }

    /// Creates an undefined type error. `type_ref` is the missing `type/<name>` object.
    #[must_use]
    pub fn undefined_type(type_ref: Ref) -> Self {
        Self::new(ErrorKind::UndefinedType(type_ref))
    }

    /// Creates an undefined reference error.
    #[must_use]
    pub fn undefined_reference(target: Ref) -> Self {
        Self::new(ErrorKind::UndefinedReference(target))
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Unrecognized character or command word.
    #[error("lexical error at {line}:{column}: {message}")]
    Lex {
        /// Description of the lexical error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// Token sequence matches no declaration shape.
    #[error("syntax error at {line}:{column}: {message}, found {found}")]
    Syntax {
        /// Description of the syntax error.
        message: String,
        /// The offending token.
        found: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// An object with this reference already exists.
    #[error("object already defined: {0}")]
    DuplicateObject(Ref),

    /// The `type/<name>` object for a definition or reference does not exist.
    #[error("undefined type: {0}")]
    UndefinedType(Ref),

    /// A reference to an undefined instance of a strict type.
    #[error("undefined reference: {0}")]
    UndefinedReference(Ref),

    /// A macro pattern that is not a valid regular expression.
    #[error("invalid macro pattern `{pattern}`: {message}")]
    InvalidMacroPattern {
        /// The pattern as written.
        pattern: String,
        /// Why it was rejected.
        message: String,
    },

    /// A macro expansion that is not a valid reference.
    #[error("macro `{pattern}` expanded to `{expansion}`, which is not a reference")]
    InvalidMacroExpansion {
        /// The pattern of the rule that matched.
        pattern: String,
        /// The text the template expanded to.
        expansion: String,
    },

    /// A type name outside the lowercase-letter alphabet.
    #[error("invalid type name: {0:?}")]
    InvalidTypeName(String),

    /// Text that is not a `type/identifier` reference.
    #[error("invalid reference: {0:?}")]
    InvalidReference(String),

    /// The document could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ErrorKind {
    /// Returns the category of this error kind.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Lex { .. } => ErrorCategory::Lexical,
            Self::Syntax { .. } => ErrorCategory::Syntax,
            Self::DuplicateObject(_)
            | Self::UndefinedType(_)
            | Self::UndefinedReference(_)
            | Self::InvalidMacroPattern { .. }
            | Self::InvalidMacroExpansion { .. }
            | Self::InvalidTypeName(_)
            | Self::InvalidReference(_) => ErrorCategory::Semantic,
            Self::Io { .. } => ErrorCategory::Io,
        }
    }
}

/// The broad class an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Raised by the lexer.
    Lexical,
    /// Raised by the parser on an unexpected token.
    Syntax,
    /// Raised by the graph builder or macro engine.
    Semantic,
    /// Raised while reading input.
    Io,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lexical => "lexical",
            Self::Syntax => "syntax",
            Self::Semantic => "semantic",
            Self::Io => "io",
        };
        f.write_str(name)
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Document name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
    /// Column number in source.
    pub column: Option<u32>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {source}:{line}")?,
            (Some(source), None) => write!(f, "at {source}")?,
            (None, Some(line)) => write!(f, "at line {line}")?,
            (None, None) => return Ok(()),
        }
        if let (Some(_), Some(column)) = (self.line, self.column) {
            write!(f, ":{column}")?;
        }
        Ok(())
    }
}

/// Result type alias for Oblique operations.
pub type Result<T> = std::result::Result<T, Error>;
