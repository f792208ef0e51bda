//! Lexer for the Oblique language.
//!
//! The lexer converts source text into a stream of tokens. It runs in two
//! modes: at the start of a line it counts indent units and recognizes
//! comments; once the first declaration character is seen it switches to
//! declaration mode until the end of the line.

use oblique_foundation::grammar::{COMMAND_MARKER, COMMENT_MARKER, INDENT_UNIT, REF_SEPARATOR};
use oblique_foundation::{Error, Ref, Result, is_ident_char, is_type_char};

use crate::span::Span;
use crate::token::{Command, Token, TokenKind};

/// Scanning mode of the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexMode {
    /// At the beginning of a line: indents, comments and blank lines.
    LineStart,
    /// Past the indents: commands, references and words.
    Declaration,
}

/// Lexer for Oblique source text.
///
/// The lexer iterates through source text and produces tokens.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Current scanning mode.
    mode: LexMode,
    /// Emit whitespace tokens instead of skipping them.
    include_whitespace: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            mode: LexMode::LineStart,
            include_whitespace: false,
        }
    }

    /// Sets whether whitespace between declaration tokens is emitted.
    #[must_use]
    pub fn with_whitespace(mut self, include: bool) -> Self {
        self.include_whitespace = include;
        self
    }

    /// Returns the current scanning mode.
    #[must_use]
    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Returns the next token from the source.
    ///
    /// After the input is exhausted every call returns [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        loop {
            let start = self.position;
            let start_line = self.line;
            let start_column = self.column;

            let kind = match self.mode {
                LexMode::LineStart => match self.scan_line_start() {
                    Some(kind) => kind,
                    None => {
                        self.mode = LexMode::Declaration;
                        continue;
                    }
                },
                LexMode::Declaration => self.scan_declaration(),
            };
            if kind.is_trivia() && !self.include_whitespace {
                continue;
            }

            return Token::new(
                kind,
                Span::new(start, self.position, start_line, start_column),
            );
        }
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Lexical errors are included as [`TokenKind::Error`] tokens. The last
    /// token is always [`TokenKind::Eof`].
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Tokenizes all source, failing on the first lexical error.
    ///
    /// # Errors
    ///
    /// Returns a lexical error for an unrecognized command word.
    pub fn tokenize(source: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            match token.kind {
                TokenKind::Error(message) => {
                    return Err(Error::lex(message, token.span.line, token.span.column));
                }
                TokenKind::Eof => {
                    tokens.push(token);
                    return Ok(tokens);
                }
                _ => tokens.push(token),
            }
        }
    }

    /// Scans one line-start token, or returns `None` to switch modes.
    fn scan_line_start(&mut self) -> Option<TokenKind> {
        if self.rest.is_empty() {
            return Some(TokenKind::Eof);
        }
        if self.rest.starts_with(INDENT_UNIT) {
            self.advance_by(INDENT_UNIT.len());
            return Some(TokenKind::Indent);
        }
        if let Some(len) = self.eol_len() {
            self.advance_by(len);
            return Some(TokenKind::Eol);
        }
        if self.peek_char() == Some(COMMENT_MARKER) {
            return Some(self.scan_comment());
        }
        None
    }

    /// Scans one declaration token.
    fn scan_declaration(&mut self) -> TokenKind {
        let Some(c) = self.peek_char() else {
            // Unterminated last line.
            self.mode = LexMode::LineStart;
            return TokenKind::Eol;
        };
        if let Some(len) = self.eol_len() {
            self.advance_by(len);
            self.mode = LexMode::LineStart;
            return TokenKind::Eol;
        }
        match c {
            ' ' | '\t' => {
                let text = self.take_while(|c| c == ' ' || c == '\t');
                TokenKind::Whitespace(text.to_string())
            }
            COMMAND_MARKER => self.scan_command(),
            c if is_type_char(c) => self.scan_reference(),
            _ => self.scan_word(),
        }
    }

    /// Scans a comment starting with `#`, up to the end of the line.
    fn scan_comment(&mut self) -> TokenKind {
        let text = self.take_while(|c| c != '\n' && c != '\r');
        TokenKind::Comment(text[COMMENT_MARKER.len_utf8()..].trim_start().to_string())
    }

    /// Scans `/word`. A reserved word becomes a command; an unknown one is an
    /// error. Anything not shaped like a command is a word.
    fn scan_command(&mut self) -> TokenKind {
        let after = &self.rest[COMMAND_MARKER.len_utf8()..];
        let name_len = after.chars().take_while(char::is_ascii_lowercase).count();
        let at_boundary = after[name_len..]
            .chars()
            .next()
            .is_none_or(|c| !is_word_char(c));
        if name_len == 0 || !at_boundary {
            return self.scan_word();
        }

        let name = &after[..name_len];
        let kind = match Command::from_word(name) {
            Some(command) => TokenKind::Command(command),
            None => TokenKind::Error(format!("unknown command `{COMMAND_MARKER}{name}`")),
        };
        self.advance_by(COMMAND_MARKER.len_utf8() + name_len);
        kind
    }

    /// Scans the longest `type/identifier` prefix, or a word if there is none.
    fn scan_reference(&mut self) -> TokenKind {
        let type_len = self.rest.chars().take_while(|&c| is_type_char(c)).count();
        let after = &self.rest[type_len..];
        let Some(ident_part) = after.strip_prefix(REF_SEPARATOR) else {
            return self.scan_word();
        };
        let ident_len = ident_part.chars().take_while(|&c| is_ident_char(c)).count();
        if ident_len == 0 {
            return self.scan_word();
        }

        let len = type_len + REF_SEPARATOR.len_utf8() + ident_len;
        let text = self.take(len);
        match text.parse::<Ref>() {
            Ok(r) => TokenKind::Reference(r),
            Err(err) => TokenKind::Error(err.to_string()),
        }
    }

    /// Scans a run of characters up to whitespace or the end of the line.
    fn scan_word(&mut self) -> TokenKind {
        let mut len = 0;
        for (i, c) in self.rest.char_indices() {
            if c == ' ' || c == '\t' || c == '\n' || self.rest[i..].starts_with("\r\n") {
                break;
            }
            len = i + c.len_utf8();
        }
        TokenKind::Word(self.take(len).to_string())
    }

    /// Returns the byte length of a line ending at the cursor, if any.
    fn eol_len(&self) -> Option<usize> {
        if self.rest.starts_with('\n') {
            Some(1)
        } else if self.rest.starts_with("\r\n") {
            Some(2)
        } else {
            None
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Consumes characters while `pred` holds and returns them.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let len = self
            .rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.rest.len(), |(i, _)| i);
        self.take(len)
    }

    /// Consumes `len` bytes and returns them.
    fn take(&mut self, len: usize) -> &'src str {
        let text = &self.rest[..len];
        self.advance_by(len);
        text
    }

    /// Advances past `len` bytes, keeping the line and column current.
    fn advance_by(&mut self, len: usize) {
        let (consumed, rest) = self.rest.split_at(len);
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.rest = rest;
        self.position += len;
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Returns true for characters that continue a word (no boundary after a command).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
