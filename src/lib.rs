//! Oblique - plain-text notes compiled into a typed object graph
//!
//! This crate re-exports all layers of the Oblique system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: oblique_language   — Lexer, macro engine, parser
//! Layer 1: oblique_storage    — Objects, Database, GraphBuilder
//! Layer 0: oblique_foundation — Core types (Ref, TypeKind, Error)
//! ```

pub use oblique_foundation as foundation;
pub use oblique_language as language;
pub use oblique_storage as storage;

pub use oblique_foundation::{Error, ErrorCategory, ErrorKind, Ref, Result, TypeKind};
pub use oblique_language::{
    ContextMode, ParseOptions, parse, parse_file, parse_file_with_options, parse_with_options,
};
pub use oblique_storage::{Database, Object};
