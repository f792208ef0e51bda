//! Integration tests for the lexer
//!
//! Tests tokenization of Oblique source text in both lexer modes.

use oblique_language::{Command, Lexer, TokenKind, tokenize};

/// Names of the token kinds, without the trailing end-of-line and end-of-input.
fn kinds(source: &str) -> Vec<&'static str> {
    Lexer::tokenize_all(source)
        .iter()
        .map(|t| t.kind.name())
        .filter(|name| *name != "end of line" && *name != "end of input")
        .collect()
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn tokenize_valid_commands() {
    let tokens = Lexer::tokenize_all("/type /lazytype /macro");
    assert_eq!(tokens[0].kind, TokenKind::Command(Command::Type));
    assert_eq!(tokens[1].kind, TokenKind::Command(Command::LazyType));
    assert_eq!(tokens[2].kind, TokenKind::Command(Command::Macro));

    assert_eq!(
        kinds("/type q Calendar quarter"),
        vec!["command", "word", "word", "word"]
    );
}

#[test]
fn tokenize_invalid_command() {
    let err = tokenize("/notreally").unwrap_err();
    assert!(err.to_string().contains("/notreally"));
}

// =============================================================================
// Indentation
// =============================================================================

#[test]
fn tokenize_indent() {
    assert_eq!(kinds("  Something"), vec!["indent", "word"]);
    assert_eq!(
        kinds("  Something and something else."),
        vec!["indent", "word", "word", "word", "word"]
    );
    assert_eq!(kinds("    Two indents"), vec!["indent", "indent", "word", "word"]);
    assert_eq!(kinds("     Five chars"), vec!["indent", "indent", "word", "word"]);
    assert_eq!(
        kinds("Indent  within   and more"),
        vec!["word", "word", "word", "word"]
    );
}

#[test]
fn indent_counts_restart_each_line() {
    assert_eq!(
        kinds("  a\n    b\nc"),
        vec!["indent", "word", "indent", "indent", "word", "word"]
    );
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn tokenize_comment() {
    assert_eq!(kinds("# Some comment"), vec!["comment"]);
    assert_eq!(kinds("  # Indented comment"), vec!["indent", "comment"]);

    let tokens = Lexer::tokenize_all("#   Some comment");
    assert_eq!(tokens[0].kind, TokenKind::Comment("Some comment".into()));
}

// =============================================================================
// References and Words
// =============================================================================

#[test]
fn tokenize_references() {
    let tokens = Lexer::tokenize_all("Ticket bug/123456 for u/joe");
    assert_eq!(tokens[1].kind, TokenKind::Reference("bug/123456".parse().unwrap()));
    assert_eq!(tokens[3].kind, TokenKind::Reference("u/joe".parse().unwrap()));
    assert_eq!(
        kinds("Ticket bug/123456 for u/joe"),
        vec!["word", "reference", "word", "reference"]
    );
}

#[test]
fn words_keep_punctuation() {
    let tokens = Lexer::tokenize_all("Item #1. (P2) blais@");
    let words: Vec<_> = tokens
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Word(w) => Some(w.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(words, vec!["Item", "#1.", "(P2)", "blais@"]);
}

#[test]
fn whitespace_tokens_on_request() {
    let with_ws: Vec<_> = Lexer::new("a  b")
        .with_whitespace(true)
        .map(|t| t.kind.name())
        .collect();
    assert_eq!(with_ws, vec!["word", "whitespace", "word", "end of line"]);
}

// =============================================================================
// Line Endings and Positions
// =============================================================================

#[test]
fn last_line_without_newline_ends_with_eol() {
    let tokens = Lexer::tokenize_all("a");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Eol);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn positions_are_tracked() {
    let source = "/type g Goal\n  g/1 Top";
    let tokens = tokenize(source).unwrap();
    let reference = tokens
        .iter()
        .find(|t| matches!(t.kind, TokenKind::Reference(_)))
        .unwrap();
    assert_eq!(reference.span.line, 2);
    assert_eq!(reference.span.column, 3);
    assert_eq!(&source[reference.span.start..reference.span.end], "g/1");
}
