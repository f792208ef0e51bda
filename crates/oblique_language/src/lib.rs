//! Lexer, macro engine and parser for the Oblique language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of Oblique source
//! - [`MacroRegistry`] - Regex shorthand expanding words into references
//! - [`ContextStack`] - Indentation frames for implicit references
//! - [`Parser`] - Single-pass parsing of tokens into a [`Database`]
//!
//! Most callers only need [`parse`] or [`parse_file`]:
//!
//! ```
//! use oblique_foundation::Ref;
//! use oblique_language::parse;
//!
//! let db = parse("/type g Goal\ng/1 Ship it\n  Write the docs\n").unwrap();
//! let item: Ref = "item/0".parse().unwrap();
//! let goal: Ref = "g/1".parse().unwrap();
//! assert_eq!(db.references(&item), &[goal]);
//! ```
//!
//! [`Database`]: oblique_storage::Database

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod lexer;
pub mod macros;
pub mod options;
pub mod parser;
pub mod session;
pub mod source;
pub mod span;
pub mod token;


pub use context::{ContextMode, ContextStack};
pub use lexer::{LexMode, Lexer};
pub use macros::{MacroRegistry, MacroRule, expand};
pub use options::ParseOptions;
pub use parser::{
    Parser, parse, parse_file, parse_file_with_options, parse_with_options, tokenize,
};
pub use session::Session;
pub use source::dedent;
pub use span::Span;
pub use token::{Command, Token, TokenKind};
