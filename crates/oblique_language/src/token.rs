//! Token types for the Oblique language.
//!
//! Tokens are the output of the lexer and input to the parser.

use std::fmt;

use oblique_foundation::Ref;
use oblique_foundation::grammar::COMMAND_MARKER;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// A reserved command word, written with a leading `/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// `/type` declares a strict type.
    Type,
    /// `/lazytype` declares a lazy type.
    LazyType,
    /// `/macro` adds a macro rule.
    Macro,
}

impl Command {
    /// Looks up a command by its word (without the leading `/`).
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "type" => Some(Self::Type),
            "lazytype" => Some(Self::LazyType),
            "macro" => Some(Self::Macro),
            _ => None,
        }
    }

    /// Returns the command word (without the leading `/`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::LazyType => "lazytype",
            Self::Macro => "macro",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COMMAND_MARKER}{}", self.as_str())
    }
}

/// Token types for the Oblique language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Line start
    /// One indent unit (two spaces).
    Indent,
    /// Comment text after `#`, leading spaces removed.
    Comment(String),

    // Declarations
    /// A command such as `/type`.
    Command(Command),
    /// An object reference such as `bug/123456`.
    Reference(Ref),
    /// Any other run of non-space characters.
    Word(String),
    /// Spaces and tabs between tokens (only when requested).
    Whitespace(String),

    // Meta
    /// End of a line.
    Eol,
    /// End of input.
    Eof,
    /// Lexer error.
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Whitespace(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Indent => "indent",
            Self::Comment(_) => "comment",
            Self::Command(_) => "command",
            Self::Reference(_) => "reference",
            Self::Word(_) => "word",
            Self::Whitespace(_) => "whitespace",
            Self::Eol => "end of line",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }

    /// Describes this token for error messages, quoting its text where it has one.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Command(command) => format!("command `{command}`"),
            Self::Reference(r) => format!("reference `{r}`"),
            Self::Word(word) => format!("word `{word}`"),
            _ => self.name().to_string(),
        }
    }
}
