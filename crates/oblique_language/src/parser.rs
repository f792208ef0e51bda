//! Parser for the Oblique language.
//!
//! The parser reads the token stream one line at a time. Each line is blank,
//! a comment, a command (`/type`, `/lazytype`, `/macro`), a named object
//! definition (`<ref> <terms>`) or an anonymous item (`<terms>`). Definitions
//! are handed to the [`Session`] as soon as their line is complete, so the
//! graph is built in a single pass.

use std::borrow::Cow;
use std::path::Path;

use log::debug;

use oblique_foundation::{Error, Ref, Result, TypeKind};
use oblique_storage::Database;

use crate::context::ContextMode;
use crate::lexer::Lexer;
use crate::options::ParseOptions;
use crate::session::Session;
use crate::source::{dedent, read_source};
use crate::token::{Command, Token, TokenKind};

/// Parser for Oblique source text.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// State the parse builds up.
    session: Session,
}

impl<'src> Parser<'src> {
    /// Creates a new parser with nested context frames.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_mode(source, ContextMode::default())
    }

    /// Creates a new parser with the given context mode.
    #[must_use]
    pub fn with_mode(source: &'src str, mode: ContextMode) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            session: Session::new(mode),
        }
    }

    /// Parses the whole source into a database.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or semantic error. No partial
    /// database is returned.
    pub fn parse(mut self) -> Result<Database> {
        while self.current.kind != TokenKind::Eof {
            self.parse_line()?;
        }
        let db = self.session.finish();
        debug!("parsed {} objects with {} edges", db.len(), db.edge_count());
        Ok(db)
    }

    /// Parses one line, including its end-of-line token.
    fn parse_line(&mut self) -> Result<()> {
        let level = self.parse_indent();
        let line = self.current.span.line;

        match &self.current.kind {
            TokenKind::Eol => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            TokenKind::Comment(_) => {
                self.advance();
                self.expect_line_end()
            }
            TokenKind::Command(command) => {
                let command = *command;
                self.advance();
                match command {
                    Command::Type => self.parse_type(TypeKind::Strict, line),
                    Command::LazyType => self.parse_type(TypeKind::Lazy, line),
                    Command::Macro => self.parse_macro(line),
                }
            }
            TokenKind::Reference(id) => {
                let id = id.clone();
                self.advance();
                let (words, refs) = self.parse_terms()?;
                self.expect_line_end()?;
                self.session.define_object(level, id, &words, &refs, line)?;
                Ok(())
            }
            TokenKind::Word(_) => {
                let (words, refs) = self.parse_terms()?;
                self.expect_line_end()?;
                self.session.define_item(level, &words, &refs, line)?;
                Ok(())
            }
            TokenKind::Error(message) => Err(self.lex_error(message)),
            TokenKind::Indent | TokenKind::Whitespace(_) => {
                Err(self.error("expected a declaration"))
            }
        }
    }

    /// Counts and consumes the indent units at the start of a line.
    fn parse_indent(&mut self) -> usize {
        let mut level = 0;
        while self.current.kind == TokenKind::Indent {
            level += 1;
            self.advance();
        }
        level
    }

    /// Parses `/type <name> <terms>` or `/lazytype <name> <terms>`.
    fn parse_type(&mut self, kind: TypeKind, line: u32) -> Result<()> {
        let TokenKind::Word(name) = &self.current.kind else {
            return Err(self.error("expected a type name"));
        };
        let name = name.clone();
        let span = self.current.span;
        self.advance();

        let (words, refs) = self.parse_terms()?;
        self.expect_line_end()?;
        self.session
            .declare_type(&name, kind, &words, &refs, line)
            .map_err(|err| span.locate(err))?;
        Ok(())
    }

    /// Parses `/macro <pattern> <template>`.
    fn parse_macro(&mut self, line: u32) -> Result<()> {
        let span = self.current.span;
        let pattern = self.parse_macro_operand("expected a macro pattern")?;
        let template = self.parse_macro_operand("expected a macro replacement")?;
        self.expect_line_end()?;
        self.session
            .define_macro(&pattern, &template, line)
            .map_err(|err| span.locate(err))
    }

    /// Parses a macro pattern or template, written as a word or a reference.
    fn parse_macro_operand(&mut self, message: &str) -> Result<String> {
        let text = match &self.current.kind {
            TokenKind::Word(word) => word.clone(),
            TokenKind::Reference(r) => r.to_string(),
            TokenKind::Error(lex_message) => return Err(self.lex_error(lex_message)),
            _ => return Err(self.error(message)),
        };
        self.advance();
        Ok(text)
    }

    /// Parses the words and references that make up a definition.
    ///
    /// Every term is kept as content text. References, and words a macro
    /// expands, are also collected as explicit references.
    fn parse_terms(&mut self) -> Result<(Vec<String>, Vec<Ref>)> {
        let mut words = Vec::new();
        let mut refs = Vec::new();
        loop {
            match &self.current.kind {
                TokenKind::Reference(r) => {
                    words.push(r.to_string());
                    refs.push(r.clone());
                }
                TokenKind::Word(word) => {
                    if let Some(target) = self
                        .session
                        .expand(word)
                        .map_err(|err| self.current.span.locate(err))?
                    {
                        refs.push(target);
                    }
                    words.push(word.clone());
                }
                _ => break,
            }
            self.advance();
        }
        Ok((words, refs))
    }

    /// Expects the end of the line (or of the input), then advances.
    fn expect_line_end(&mut self) -> Result<()> {
        match &self.current.kind {
            TokenKind::Eol => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            TokenKind::Error(message) => Err(self.lex_error(message)),
            _ => Err(self.error("expected end of line")),
        }
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Creates a syntax error at the current token.
    fn error(&self, message: &str) -> Error {
        let span = self.current.span;
        Error::syntax(message, self.current.kind.describe(), span.line, span.column)
    }

    /// Creates a lexical error at the current token.
    fn lex_error(&self, message: &str) -> Error {
        let span = self.current.span;
        Error::lex(message, span.line, span.column)
    }
}

/// Parses source text into a database.
///
/// # Errors
/// Returns the first lexical, syntax or semantic error.
pub fn parse(source: &str) -> Result<Database> {
    Parser::new(source).parse()
}

/// Parses source text into a database with the given options.
///
/// # Errors
/// Returns the first lexical, syntax or semantic error, labelled with
/// [`ParseOptions::source_name`] if one is set.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Database> {
    let text = if options.dedent {
        dedent(source)
    } else {
        Cow::Borrowed(source)
    };
    let result = Parser::with_mode(&text, options.context_mode).parse();
    match &options.source_name {
        Some(name) => result.map_err(|err| err.with_source(name.clone())),
        None => result,
    }
}

/// Reads and parses a document.
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or the first parse
/// error, labelled with the file path.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Database> {
    parse_file_with_options(path, &ParseOptions::default())
}

/// Reads and parses a document with the given options.
///
/// Errors are labelled with [`ParseOptions::source_name`], or with the file
/// path if no name is set.
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or the first parse error.
pub fn parse_file_with_options(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Database> {
    let path = path.as_ref();
    let text = read_source(path)?;
    debug!("parsing {}", path.display());
    if options.source_name.is_some() {
        parse_with_options(&text, options)
    } else {
        let options = options
            .clone()
            .with_source_name(path.display().to_string());
        parse_with_options(&text, &options)
    }
}

/// Tokenizes source text, failing on the first lexical error.
///
/// # Errors
/// Returns a lexical error for an unrecognized command word.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::tokenize(source)
}
